//! Trade records emitted when a taker executes.

use crate::types::order::{Order, Side};
use crate::types::units::{Price, Volume};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A completed execution between a taker and the makers it consumed.
///
/// One trade is emitted per submission that fills anything: when the taker is
/// exhausted, or after the fills of a partially executed market order. The
/// `price` is the last-touched maker's price (price improvement accrues to
/// the taker) and `volume` is the taker's total fill for the submission.
///
/// Immutable once emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// Execution time, milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// Instrument of the taker order.
    pub instrument: String,
    /// The last-touched maker's price.
    pub price: Price,
    /// The taker's total filled volume for this submission.
    pub volume: Volume,
    /// The taker's side.
    pub side: Side,
    /// Snapshot of the last maker consumed.
    pub maker_order: Order,
    /// Snapshot of the taker at emission.
    pub taker_order: Order,
    /// Venue of the maker order.
    pub exchange: String,
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}@{} taker {} maker {}",
            self.instrument, self.side, self.volume, self.price, self.taker_order.id, self.maker_order.id
        )
    }
}
