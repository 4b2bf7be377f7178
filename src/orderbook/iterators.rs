//! Lazy iterators over price levels for depth analysis.
//!
//! These iterate in price-priority order (best to worst) without collecting,
//! so they compose with standard iterator combinators and can short-circuit.

use super::book::OrderBook;
use crate::types::{Price, Side, Volume};
use serde::Serialize;

/// Information about one price level, with the running depth up to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
    /// The level's price.
    pub price: Price,
    /// Visible volume at this level.
    pub volume: Volume,
    /// Cumulative visible volume up to and including this level.
    pub cumulative: Volume,
}

impl OrderBook {
    /// Levels on `side` in priority order as `(price, volume)` pairs.
    pub fn iter_levels(&self, side: Side) -> impl Iterator<Item = (Price, Volume)> + '_ {
        self.ladder(side).iter().map(|(price, level)| (price, level.volume()))
    }

    /// Levels on `side` in priority order with a running depth total.
    ///
    /// Useful for finding how many levels absorb a given quantity:
    ///
    /// ```
    /// use matchbook_rs::prelude::*;
    ///
    /// let mut book = OrderBook::new("BTC/USD");
    /// book.submit(Order::limit("BTC/USD", Side::Buy, Price::from_f64(5.0), Volume::from_f64(1.0))).unwrap();
    /// book.submit(Order::limit("BTC/USD", Side::Buy, Price::from_f64(4.5), Volume::from_f64(2.0))).unwrap();
    ///
    /// let needed = book
    ///     .levels_with_cumulative_depth(Side::Buy)
    ///     .take_while(|info| info.cumulative <= Volume::from_f64(3.0))
    ///     .count();
    /// assert_eq!(needed, 2);
    /// ```
    pub fn levels_with_cumulative_depth(&self, side: Side) -> impl Iterator<Item = LevelInfo> + '_ {
        self.iter_levels(side).scan(Volume::ZERO, |depth, (price, volume)| {
            *depth += volume;
            Some(LevelInfo {
                price,
                volume,
                cumulative: *depth,
            })
        })
    }

    /// The price at which cumulative depth on `side` reaches `target`, or
    /// `None` if the whole side is thinner than that.
    #[must_use]
    pub fn price_at_depth(&self, side: Side, target: Volume) -> Option<Price> {
        self.levels_with_cumulative_depth(side)
            .find(|info| info.cumulative >= target)
            .map(|info| info.price)
    }
}
