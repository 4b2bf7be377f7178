//! The matching walk and the commit of staged executions.
//!
//! Matching never touches the ladders or levels directly: the walk produces
//! per-level executions on shadow copies, and the commit step splices them
//! into the book only after the submission's time-in-force policy has allowed
//! the fills. A rejected fill-or-kill therefore has nothing to roll back.

use super::book::OrderBook;
use super::level::LevelExecution;
use crate::types::{Order, Price, Side};

impl OrderBook {
    /// Walk the opposite ladder from the best price outward, crossing `taker`
    /// against each level it reaches, until the taker fills or the prices
    /// stop crossing.
    ///
    /// Advances `taker.filled` and stages events, but leaves the ladders
    /// untouched. Returns the executions to apply on commit, in walk order.
    pub(super) fn match_against(&mut self, taker: &mut Order) -> Vec<(Price, LevelExecution)> {
        let mut touched = Vec::new();

        let opposite = match taker.side {
            Side::Buy => &self.asks,
            Side::Sell => &self.bids,
        };
        for (price, level) in opposite.iter() {
            if !taker.crosses(price) {
                break;
            }
            let execution = level.cross(taker, &mut self.collector);
            touched.push((price, execution));
            if taker.is_filled() {
                break;
            }
        }
        touched
    }

    /// Apply staged executions to the opposite ladder: advance maker fills,
    /// drop consumed makers from the location index, and splice out levels
    /// the walk exhausted.
    ///
    /// Panics if an execution points at a level the ladder no longer has;
    /// that is an internal invariant violation, not a caller error.
    pub(super) fn commit(&mut self, taker_side: Side, touched: &[(Price, LevelExecution)]) {
        let opposite = match taker_side {
            Side::Buy => &mut self.asks,
            Side::Sell => &mut self.bids,
        };
        for (price, execution) in touched {
            let level = opposite.get_mut(*price).unwrap_or_else(|| {
                panic!("order book invariant violated: executed level {price} missing from ladder")
            });
            let consumed = level.apply(execution);
            for id in consumed {
                self.locations.remove(&id);
            }
            if level.is_empty() {
                opposite.remove(*price);
            }
        }
    }

    /// Rest a limit remainder on its own ladder, creating the level if the
    /// price is new. Stages the OPEN event.
    pub(super) fn rest(&mut self, order: Order) {
        let side = order.side;
        let price = order.price;
        let id = order.id;

        let ladder = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let level = ladder.level_or_insert(price);
        level.add(order, &mut self.collector);
        self.locations.insert(id, (side, price));
    }
}
