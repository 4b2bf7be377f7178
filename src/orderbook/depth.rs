//! Aggregated depth views: quotes, top of book, and serializable snapshots.

use crate::types::{Price, Volume};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One visible level: a price and the volume resting at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The level's price.
    pub price: Price,
    /// Visible volume at that price.
    pub volume: Volume,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.volume, self.price)
    }
}

/// Best bid and best ask with their visible volumes.
///
/// An empty side is `None`; with fixed-point integer prices there is no
/// natural zero/infinity sentinel pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopOfBook {
    /// Best bid quote, if the bid side is non-empty.
    pub bid: Option<Quote>,
    /// Best ask quote, if the ask side is non-empty.
    pub ask: Option<Quote>,
}

impl TopOfBook {
    /// `ask - bid`, or `None` unless both sides are present.
    #[must_use]
    pub fn spread(&self) -> Option<Price> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) => Some(ask.price.saturating_sub(bid.price)),
            _ => None,
        }
    }
}

/// A point-in-time view of the visible depth on both sides, best price first.
///
/// Serializable for export to UIs and telemetry consumers; the matching core
/// itself never persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSnapshot {
    /// Instrument the book trades.
    pub instrument: String,
    /// Capture time, milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// Bid levels, best (highest) first.
    pub bids: Vec<Quote>,
    /// Ask levels, best (lowest) first.
    pub asks: Vec<Quote>,
}

impl DepthSnapshot {
    /// Total visible bid volume in this snapshot.
    #[must_use]
    pub fn bid_volume(&self) -> Volume {
        self.bids.iter().map(|q| q.volume).sum()
    }

    /// Total visible ask volume in this snapshot.
    #[must_use]
    pub fn ask_volume(&self) -> Volume {
        self.asks.iter().map(|q| q.volume).sum()
    }

    /// True when both sides are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
