//! Book-level laws: operations that must compose to a no-op, and policy
//! outcomes that must be all-or-nothing.

use crate::common::{kinds, px, seeded_book, vol};
use matchbook_rs::prelude::*;

#[test]
fn test_add_then_cancel_restores_the_book() {
    let mut fixture = seeded_book();
    let before = fixture.book.snapshot();

    let order = Order::limit("BTC/USD", Side::Buy, px(4.8), vol(0.7));
    fixture.book.submit(order.clone()).unwrap();
    fixture.book.cancel(&order).unwrap();

    let after = fixture.book.snapshot();
    assert_eq!(before.bids, after.bids);
    assert_eq!(before.asks, after.asks);
    assert!(!fixture.book.contains(order.id));

    // the round trip is exactly one OPEN and one CANCEL
    let events = fixture.capture.take();
    assert_eq!(kinds(&events), vec![EventKind::Open, EventKind::Cancel]);
    assert_eq!(events[0].order().unwrap().id, order.id);
    assert_eq!(events[1].order().unwrap().id, order.id);
}

#[test]
fn test_rejected_fok_is_a_complete_no_op() {
    let mut fixture = seeded_book();
    let before = fixture.book.snapshot();
    let orders_before: Vec<_> = fixture
        .book
        .iter_orders()
        .map(|o| (o.id, o.filled))
        .collect();

    // would partially fill two levels, then fail
    let order = Order::limit("BTC/USD", Side::Buy, px(6.5), vol(10.0))
        .with_flag(OrderFlag::FillOrKill);
    let result = fixture.book.submit(order).unwrap();

    assert_eq!(result.status, SubmitStatus::Rejected);
    assert_eq!(result.filled, Volume::ZERO);
    assert!(fixture.capture.is_empty());

    let after = fixture.book.snapshot();
    assert_eq!(before.bids, after.bids);
    assert_eq!(before.asks, after.asks);

    // no maker's fill moved, even transiently visible ones
    let orders_after: Vec<_> = fixture
        .book
        .iter_orders()
        .map(|o| (o.id, o.filled))
        .collect();
    assert_eq!(orders_before, orders_after);
}

#[test]
fn test_rejected_aon_is_a_complete_no_op() {
    let mut fixture = seeded_book();
    let before = fixture.book.snapshot();

    let order = Order::market("BTC/USD", Side::Sell, vol(5.0)).with_flag(OrderFlag::AllOrNone);
    let result = fixture.book.submit(order).unwrap();

    assert_eq!(result.status, SubmitStatus::Rejected);
    assert!(fixture.capture.is_empty());
    assert_eq!(before.bids, fixture.book.snapshot().bids);
}

#[test]
fn test_ioc_market_partial_fills_then_one_cancel_and_no_resting() {
    let mut fixture = seeded_book();
    let resting_before = fixture.book.order_count();

    let order = Order::market("BTC/USD", Side::Sell, vol(3.0))
        .with_flag(OrderFlag::ImmediateOrCancel);
    let result = fixture.book.submit(order.clone()).unwrap();

    assert_eq!(result.status, SubmitStatus::Canceled);
    assert_eq!(result.filled, vol(2.0));

    let events = fixture.capture.take();
    let cancels: Vec<_> = events
        .iter()
        .filter(|e| e.kind() == EventKind::Cancel)
        .collect();
    assert_eq!(cancels.len(), 1);
    assert_eq!(cancels[0].order().unwrap().id, order.id);
    assert!(events.iter().any(|e| e.kind() == EventKind::Fill));

    // both consumed bid makers left the book, and the taker never rested
    assert_eq!(fixture.book.order_count(), resting_before - 2);
    assert!(!fixture.book.contains(order.id));
}

#[test]
fn test_events_of_one_submission_are_delivered_after_the_outcome() {
    // A sink that observes the result of a submission only sees the full
    // batch: the first event of a crossing submission is never delivered
    // before the last one exists.
    let mut fixture = seeded_book();
    let taker = Order::limit("BTC/USD", Side::Buy, px(6.0), vol(1.5));
    fixture.book.submit(taker).unwrap();

    let events = fixture.capture.take();
    assert_eq!(events.len(), 5);
    assert_eq!(events.last().unwrap().kind(), EventKind::Trade);
}

#[test]
fn test_no_crossed_book_after_any_submission() {
    let mut fixture = seeded_book();
    let submissions = vec![
        Order::limit("BTC/USD", Side::Buy, px(5.4), vol(0.3)),
        Order::limit("BTC/USD", Side::Sell, px(5.45), vol(0.4)),
        Order::limit("BTC/USD", Side::Buy, px(5.45), vol(0.2)),
        Order::limit("BTC/USD", Side::Sell, px(4.0), vol(1.1)),
        Order::market("BTC/USD", Side::Buy, vol(0.5)),
    ];

    for order in submissions {
        fixture.book.submit(order).unwrap();
        if let (Some(bid), Some(ask)) = (fixture.book.best_bid(), fixture.book.best_ask()) {
            assert!(bid < ask, "book crossed: bid {bid} >= ask {ask}");
        }
    }
}
