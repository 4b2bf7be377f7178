//! Lifecycle events, the sole externally observable record of book mutation.

use crate::types::order::Order;
use crate::types::trade::Trade;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A single book lifecycle event.
///
/// Order-carrying events hold a snapshot of the order at emission time, so a
/// `Change` records the maker's `filled` as of that fill, not its final state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "UPPERCASE")]
pub enum Event {
    /// An order started resting on the book.
    Open(Order),
    /// An order was completely filled (terminal).
    Fill(Order),
    /// An order was partially filled, or amended in place.
    Change(Order),
    /// An order was removed without completing (terminal).
    Cancel(Order),
    /// A taker finished executing against one or more makers.
    Trade(Trade),
}

impl Event {
    /// The event's kind tag.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Open(_) => EventKind::Open,
            Event::Fill(_) => EventKind::Fill,
            Event::Change(_) => EventKind::Change,
            Event::Cancel(_) => EventKind::Cancel,
            Event::Trade(_) => EventKind::Trade,
        }
    }

    /// The order snapshot this event targets, if any.
    #[must_use]
    pub fn order(&self) -> Option<&Order> {
        match self {
            Event::Open(order)
            | Event::Fill(order)
            | Event::Change(order)
            | Event::Cancel(order) => Some(order),
            Event::Trade(_) => None,
        }
    }

    /// The trade record this event targets, if any.
    #[must_use]
    pub fn trade(&self) -> Option<&Trade> {
        match self {
            Event::Trade(trade) => Some(trade),
            _ => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Trade(trade) => write!(f, "{} {}", self.kind(), trade),
            _ => write!(f, "{} {}", self.kind(), self.order().expect("order event")),
        }
    }
}

/// Kind tag for an [`Event`], independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventKind {
    /// See [`Event::Open`].
    Open,
    /// See [`Event::Fill`].
    Fill,
    /// See [`Event::Change`].
    Change,
    /// See [`Event::Cancel`].
    Cancel,
    /// See [`Event::Trade`].
    Trade,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Open => write!(f, "OPEN"),
            EventKind::Fill => write!(f, "FILL"),
            EventKind::Change => write!(f, "CHANGE"),
            EventKind::Cancel => write!(f, "CANCEL"),
            EventKind::Trade => write!(f, "TRADE"),
        }
    }
}

/// Event sink registered on a book.
///
/// Called synchronously, in order, for every committed event of a submission.
/// Must be non-blocking and must not reenter the book on the same executor;
/// handing events to a channel for another executor is the sink's concern.
pub type EventListener = Arc<dyn Fn(&Event) + Send + Sync>;
