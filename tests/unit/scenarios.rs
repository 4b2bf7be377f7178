//! End-to-end matching scenarios against the seeded reference book.
//!
//! Each test starts from the same depth (bids 5.0 x 1.0 and 4.5 x 1.0, asks
//! 5.5 x 1.0, 6.0 x 1.0, 6.5 x 1.0) and asserts the exact event sequence and
//! resulting top of book.

use crate::common::{kinds, px, seeded_book, vol};
use matchbook_rs::prelude::*;

#[test]
fn test_limit_sell_partially_fills_best_bid() {
    let mut fixture = seeded_book();
    let taker = Order::limit("BTC/USD", Side::Sell, px(5.0), vol(0.5));

    let result = fixture.book.submit(taker.clone()).unwrap();
    assert_eq!(result.status, SubmitStatus::Filled);

    let events = fixture.capture.take();
    assert_eq!(
        kinds(&events),
        vec![EventKind::Fill, EventKind::Change, EventKind::Trade]
    );

    // FILL(taker) is terminal
    assert_eq!(events[0].order().unwrap().id, taker.id);
    assert_eq!(events[0].order().unwrap().filled, vol(0.5));
    // CHANGE(maker) shows the advanced fill on the 5.0 bid
    let maker = events[1].order().unwrap();
    assert_eq!(maker.price, px(5.0));
    assert_eq!(maker.filled, vol(0.5));
    // TRADE at the maker's price for the taker's full volume
    let trade = events[2].trade().unwrap();
    assert_eq!(trade.price, px(5.0));
    assert_eq!(trade.volume, vol(0.5));
    assert_eq!(trade.side, Side::Sell);

    let top = fixture.book.top_of_book();
    assert_eq!(top.bid, Some(Quote { price: px(5.0), volume: vol(0.5) }));
    assert_eq!(top.ask, Some(Quote { price: px(5.5), volume: vol(1.0) }));
}

#[test]
fn test_limit_buy_sweeps_two_ask_levels() {
    let mut fixture = seeded_book();
    let taker = Order::limit("BTC/USD", Side::Buy, px(6.0), vol(1.5));

    let result = fixture.book.submit(taker.clone()).unwrap();
    assert_eq!(result.status, SubmitStatus::Filled);
    assert_eq!(result.filled, vol(1.5));

    let events = fixture.capture.take();
    assert_eq!(
        kinds(&events),
        vec![
            EventKind::Change,
            EventKind::Fill,
            EventKind::Fill,
            EventKind::Change,
            EventKind::Trade,
        ]
    );

    // level 5.5: taker partially filled, maker consumed
    assert_eq!(events[0].order().unwrap().filled, vol(1.0));
    assert_eq!(events[1].order().unwrap().price, px(5.5));
    // level 6.0: taker completes, maker keeps 0.5
    assert_eq!(events[2].order().unwrap().id, taker.id);
    let maker = events[3].order().unwrap();
    assert_eq!(maker.price, px(6.0));
    assert_eq!(maker.filled, vol(0.5));
    // one TRADE summarising the whole submission at the last-touched price
    let trade = events[4].trade().unwrap();
    assert_eq!(trade.price, px(6.0));
    assert_eq!(trade.volume, vol(1.5));
    assert_eq!(trade.maker_order.price, px(6.0));

    let top = fixture.book.top_of_book();
    assert_eq!(top.bid, Some(Quote { price: px(5.0), volume: vol(1.0) }));
    assert_eq!(top.ask, Some(Quote { price: px(6.0), volume: vol(0.5) }));
}

#[test]
fn test_fok_buy_below_ask_produces_no_events() {
    let mut fixture = seeded_book();
    let before = fixture.book.snapshot();

    let order = Order::limit("BTC/USD", Side::Buy, px(5.2), vol(0.5))
        .with_flag(OrderFlag::FillOrKill);
    let result = fixture.book.submit(order).unwrap();

    assert_eq!(result.status, SubmitStatus::Rejected);
    assert!(fixture.capture.is_empty());

    let after = fixture.book.snapshot();
    assert_eq!(before.bids, after.bids);
    assert_eq!(before.asks, after.asks);
}

#[test]
fn test_market_sell_exhausts_bids_and_trades_partial() {
    let mut fixture = seeded_book();
    let taker = Order::market("BTC/USD", Side::Sell, vol(3.0));

    let result = fixture.book.submit(taker.clone()).unwrap();
    assert_eq!(result.status, SubmitStatus::Expired);
    assert_eq!(result.filled, vol(2.0));
    assert_eq!(result.remaining, vol(1.0));

    let events = fixture.capture.take();
    assert_eq!(
        kinds(&events),
        vec![
            EventKind::Change,
            EventKind::Fill,
            EventKind::Change,
            EventKind::Fill,
            EventKind::Trade,
        ]
    );

    // 5.0 then 4.5 consumed in price priority
    assert_eq!(events[1].order().unwrap().price, px(5.0));
    assert_eq!(events[3].order().unwrap().price, px(4.5));
    // the partial TRADE covers what actually filled, at the last price touched
    let trade = events[4].trade().unwrap();
    assert_eq!(trade.volume, vol(2.0));
    assert_eq!(trade.price, px(4.5));
    assert_eq!(trade.taker_order.id, taker.id);

    let top = fixture.book.top_of_book();
    assert_eq!(top.bid, None);
    assert_eq!(top.ask, Some(Quote { price: px(5.5), volume: vol(1.0) }));
}

#[test]
fn test_cancel_best_bid() {
    let mut fixture = seeded_book();
    let bid_at_5 = fixture.seeds[0].clone();

    let removed = fixture.book.cancel(&bid_at_5).unwrap();
    assert_eq!(removed.id, bid_at_5.id);

    let events = fixture.capture.take();
    assert_eq!(kinds(&events), vec![EventKind::Cancel]);
    assert_eq!(events[0].order().unwrap().id, bid_at_5.id);

    let top = fixture.book.top_of_book();
    assert_eq!(top.bid, Some(Quote { price: px(4.5), volume: vol(1.0) }));
}

#[test]
fn test_ioc_buy_fills_at_best_and_cancels_remainder() {
    let mut fixture = seeded_book();
    let taker = Order::limit("BTC/USD", Side::Buy, px(5.5), vol(2.0))
        .with_flag(OrderFlag::ImmediateOrCancel);

    let result = fixture.book.submit(taker.clone()).unwrap();
    assert_eq!(result.status, SubmitStatus::Canceled);
    assert_eq!(result.filled, vol(1.0));

    let events = fixture.capture.take();
    assert_eq!(
        kinds(&events),
        vec![EventKind::Change, EventKind::Fill, EventKind::Cancel]
    );
    assert_eq!(events[1].order().unwrap().price, px(5.5));
    // CANCEL carries the taker with its partial fill
    let cancelled = events[2].order().unwrap();
    assert_eq!(cancelled.id, taker.id);
    assert_eq!(cancelled.filled, vol(1.0));

    let top = fixture.book.top_of_book();
    assert_eq!(top.bid, Some(Quote { price: px(5.0), volume: vol(1.0) }));
    assert_eq!(top.ask, Some(Quote { price: px(6.0), volume: vol(1.0) }));
}
