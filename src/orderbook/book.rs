//! Core OrderBook: the two ladders, the event collector, and the query API.

use crate::orderbook::collector::EventCollector;
use crate::orderbook::depth::{DepthSnapshot, Quote, TopOfBook};
use crate::orderbook::ladder::Ladder;
use crate::orderbook::level::PriceLevel;
use crate::types::{EventListener, Order, OrderId, Price, Side, Volume};
use crate::utils::current_time_millis;
use serde::Serialize;
use std::collections::HashMap;

/// How a submission left the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SubmitStatus {
    /// The taker crossed and filled completely.
    Filled,
    /// A limit remainder now rests on the book.
    Rested,
    /// An immediate-or-cancel remainder was cancelled.
    Canceled,
    /// Fill-or-kill / all-or-none could not fully fill; nothing was applied.
    Rejected,
    /// A market-order remainder was dropped after exhausting the opposite side.
    Expired,
}

/// Outcome of one `submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmitResult {
    /// The submitted order's id.
    pub id: OrderId,
    /// How the submission concluded.
    pub status: SubmitStatus,
    /// Volume executed by this submission. Zero for a rejected order, whose
    /// staged fills were discarded.
    pub filled: Volume,
    /// Volume left unexecuted (resting, cancelled, or dropped).
    pub remaining: Volume,
}

/// A limit order book for a single instrument on a single venue.
///
/// The book owns its ladders, levels, and resting orders exclusively, and is
/// driven by one logical executor: `submit` and `cancel` take `&mut self` and
/// run to completion. Every mutation is published through the registered
/// [`EventListener`] as an all-or-nothing batch per submission.
pub struct OrderBook {
    /// The instrument this book trades.
    pub(super) instrument: String,

    /// Venue name, stamped on resting orders' trades.
    pub(super) exchange: String,

    /// Bid side, best price is the maximum.
    pub(super) bids: Ladder,

    /// Ask side, best price is the minimum.
    pub(super) asks: Ladder,

    /// Staging buffer for per-submission event batches.
    pub(super) collector: EventCollector,

    /// Where each resting order currently sits, for O(1) duplicate-id checks
    /// and cancel-by-id. Derived state; the ladders are authoritative.
    pub(super) locations: HashMap<OrderId, (Side, Price)>,
}

impl OrderBook {
    /// Create an empty book for `instrument` with no event sink.
    #[must_use]
    pub fn new(instrument: &str) -> Self {
        OrderBook {
            instrument: instrument.to_string(),
            exchange: String::new(),
            bids: Ladder::new(Side::Buy),
            asks: Ladder::new(Side::Sell),
            collector: EventCollector::new(None),
            locations: HashMap::new(),
        }
    }

    /// Create an empty book with an event sink registered.
    #[must_use]
    pub fn with_listener(instrument: &str, listener: EventListener) -> Self {
        let mut book = Self::new(instrument);
        book.collector = EventCollector::new(Some(listener));
        book
    }

    /// Create an empty book carrying a venue name.
    #[must_use]
    pub fn with_exchange(instrument: &str, exchange: &str) -> Self {
        let mut book = Self::new(instrument);
        book.exchange = exchange.to_string();
        book
    }

    /// Register or replace the event sink.
    pub fn set_callback(&mut self, listener: EventListener) {
        self.collector.set_callback(listener);
    }

    /// The instrument this book trades.
    #[must_use]
    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    /// The venue name, empty if unset.
    #[must_use]
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /// Best bid price, if any.
    #[must_use]
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best()
    }

    /// Best ask price, if any.
    #[must_use]
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best()
    }

    /// Best bid and ask with the visible volume at those prices.
    ///
    /// An empty side yields `None` for that quote.
    #[must_use]
    pub fn top_of_book(&self) -> TopOfBook {
        TopOfBook {
            bid: self.quote_at(Side::Buy, 0),
            ask: self.quote_at(Side::Sell, 0),
        }
    }

    /// `best_ask - best_bid`, or `None` unless both sides are populated.
    ///
    /// The book is never crossed, so the difference cannot be negative.
    #[must_use]
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.saturating_sub(bid)),
            _ => None,
        }
    }

    /// The `n`-th level from the top of `side` as a quote, or `None` past
    /// the end of the ladder.
    #[must_use]
    pub fn level(&self, n: usize, side: Side) -> Option<Quote> {
        self.quote_at(side, n)
    }

    /// The quote resting at exactly `price` on `side`, if that level exists.
    #[must_use]
    pub fn level_at_price(&self, side: Side, price: Price) -> Option<Quote> {
        self.ladder(side).get(price).map(|level| Quote {
            price: level.price(),
            volume: level.volume(),
        })
    }

    /// Up to `depth` levels per side from the top, as a serializable snapshot.
    ///
    /// `depth == 0` means every level.
    #[must_use]
    pub fn levels(&self, depth: usize) -> DepthSnapshot {
        let take = if depth == 0 { usize::MAX } else { depth };
        let collect = |ladder: &Ladder| {
            ladder
                .iter()
                .take(take)
                .map(|(price, level)| Quote {
                    price,
                    volume: level.volume(),
                })
                .collect()
        };
        DepthSnapshot {
            instrument: self.instrument.clone(),
            timestamp: current_time_millis(),
            bids: collect(&self.bids),
            asks: collect(&self.asks),
        }
    }

    /// Full-depth snapshot of both sides.
    #[must_use]
    pub fn snapshot(&self) -> DepthSnapshot {
        self.levels(0)
    }

    /// The resting level at `(side, price)`, if it exists.
    #[must_use]
    pub fn price_level(&self, side: Side, price: Price) -> Option<&PriceLevel> {
        self.ladder(side).get(price)
    }

    /// Where the order with `id` currently rests, if it does.
    #[must_use]
    pub fn order_location(&self, id: OrderId) -> Option<(Side, Price)> {
        self.locations.get(&id).copied()
    }

    /// True if the order with `id` is currently resting.
    #[must_use]
    pub fn contains(&self, id: OrderId) -> bool {
        self.locations.contains_key(&id)
    }

    /// Number of resting orders across both sides.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of price levels on `side`.
    #[must_use]
    pub fn level_count(&self, side: Side) -> usize {
        self.ladder(side).len()
    }

    /// Total visible volume on `side`.
    #[must_use]
    pub fn depth_volume(&self, side: Side) -> Volume {
        self.ladder(side).volume()
    }

    /// All resting orders: asks from the top of book outward, then bids from
    /// the top of book outward, FIFO within each level.
    pub fn iter_orders(&self) -> impl Iterator<Item = &Order> {
        self.asks
            .iter()
            .flat_map(|(_, level)| level.iter())
            .chain(self.bids.iter().flat_map(|(_, level)| level.iter()))
    }

    pub(super) fn ladder(&self, side: Side) -> &Ladder {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub(super) fn ladder_mut(&mut self, side: Side) -> &mut Ladder {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    fn quote_at(&self, side: Side, n: usize) -> Option<Quote> {
        self.ladder(side).nth(n).map(|level| Quote {
            price: level.price(),
            volume: level.volume(),
        })
    }
}

impl std::fmt::Debug for OrderBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderBook")
            .field("instrument", &self.instrument)
            .field("bid_levels", &self.bids.len())
            .field("ask_levels", &self.asks.len())
            .field("orders", &self.locations.len())
            .finish()
    }
}
