//! One side of the book: price levels kept in a sorted map.

use crate::orderbook::level::PriceLevel;
use crate::types::{Price, Side, Volume};
use either::Either;
use std::collections::BTreeMap;

/// The sorted sequence of price levels on one side.
///
/// Keys are strictly increasing by construction. The aggressive end is the
/// maximum price for bids and the minimum for asks; all iteration here is in
/// that priority order (best first).
#[derive(Debug)]
pub(crate) struct Ladder {
    side: Side,
    levels: BTreeMap<Price, PriceLevel>,
}

impl Ladder {
    pub fn new(side: Side) -> Self {
        Ladder {
            side,
            levels: BTreeMap::new(),
        }
    }

    /// Best (most aggressive) price, if the side is non-empty.
    pub fn best(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// Levels in priority order, best first.
    pub fn iter(&self) -> impl Iterator<Item = (Price, &PriceLevel)> {
        let iter = match self.side {
            Side::Buy => Either::Left(self.levels.iter().rev()),
            Side::Sell => Either::Right(self.levels.iter()),
        };
        iter.map(|(price, level)| (*price, level))
    }

    /// The `n`-th level from the top, if it exists.
    pub fn nth(&self, n: usize) -> Option<&PriceLevel> {
        self.iter().nth(n).map(|(_, level)| level)
    }

    pub fn get(&self, price: Price) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    pub fn get_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// The level at `price`, created empty if new.
    pub fn level_or_insert(&mut self, price: Price) -> &mut PriceLevel {
        self.levels.entry(price).or_insert_with(|| PriceLevel::new(price))
    }

    /// Remove the level at `price`.
    pub fn remove(&mut self, price: Price) -> Option<PriceLevel> {
        self.levels.remove(&price)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Total visible volume across all levels.
    pub fn volume(&self) -> Volume {
        self.levels.values().map(PriceLevel::volume).sum()
    }
}
