//! Order records and their enumerations.

use crate::types::units::{Price, Volume};
use crate::utils::current_time_millis;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Which side of the book an order belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Bid side; crosses against asks.
    Buy,
    /// Ask side; crosses against bids.
    Sell,
}

impl Side {
    /// The side an incoming order matches against.
    #[must_use]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// The execution style of an order.
///
/// Stop variants are reserved: the book refuses them at submission with
/// [`BookError::UnsupportedOrderType`](crate::BookError::UnsupportedOrderType).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Cross the spread up to the limit price; rest any remainder.
    Limit,
    /// Cross at any price; the remainder is dropped, never rested.
    Market,
    /// Reserved. Triggers a market order when the stop price crosses.
    StopMarket,
    /// Reserved. Triggers a limit order when the stop price crosses.
    StopLimit,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Limit => write!(f, "LIMIT"),
            OrderType::Market => write!(f, "MARKET"),
            OrderType::StopMarket => write!(f, "STOP_MARKET"),
            OrderType::StopLimit => write!(f, "STOP_LIMIT"),
        }
    }
}

/// Time-in-force policy applied when a submission cannot fully fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderFlag {
    /// Default: fill what crosses, rest or drop the remainder by order type.
    #[default]
    None,
    /// Fill the entire volume immediately or do nothing.
    FillOrKill,
    /// Fill the entire volume in this attempt or do nothing.
    AllOrNone,
    /// Fill what crosses immediately, cancel the remainder.
    ImmediateOrCancel,
}

impl fmt::Display for OrderFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderFlag::None => write!(f, "NONE"),
            OrderFlag::FillOrKill => write!(f, "FILL_OR_KILL"),
            OrderFlag::AllOrNone => write!(f, "ALL_OR_NONE"),
            OrderFlag::ImmediateOrCancel => write!(f, "IMMEDIATE_OR_CANCEL"),
        }
    }
}

/// Opaque unique order identifier, unique within a book's lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        OrderId(Uuid::new_v4())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        OrderId::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submitted instruction. The same record is also the resting maker once
/// it lands on the book.
///
/// Only `filled` mutates after construction, and only inside the matching
/// routine. Callers must not modify an order after submitting it; the book
/// keeps its own copy.
///
/// Equality is by `id`: two snapshots of the same order at different fill
/// states compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier within the book's lifetime.
    pub id: OrderId,
    /// Submission time, milliseconds since the Unix epoch. Non-decreasing
    /// across submissions; maintaining that is the driver's concern.
    pub timestamp: u64,
    /// Buy or sell.
    pub side: Side,
    /// Limit price. Retained but ignored for crossing on market orders.
    pub price: Price,
    /// Total volume, set at submission and never modified.
    pub volume: Volume,
    /// Volume filled so far. Monotonically non-decreasing, never exceeds
    /// `volume`; `filled == volume` is terminal.
    pub filled: Volume,
    /// Execution style.
    pub order_type: OrderType,
    /// Time-in-force policy.
    pub flag: OrderFlag,
    /// Descriptive instrument name; not used by matching.
    pub instrument: String,
    /// Descriptive venue name; not used by matching.
    pub exchange: String,
}

impl Order {
    /// Create a limit order with a fresh id, the current timestamp, and no flag.
    #[must_use]
    pub fn limit(instrument: &str, side: Side, price: Price, volume: Volume) -> Self {
        Order {
            id: OrderId::new(),
            timestamp: current_time_millis(),
            side,
            price,
            volume,
            filled: Volume::ZERO,
            order_type: OrderType::Limit,
            flag: OrderFlag::None,
            instrument: instrument.to_string(),
            exchange: String::new(),
        }
    }

    /// Create a market order with a fresh id and the current timestamp.
    ///
    /// The price is zero; it is never consulted for crossing.
    #[must_use]
    pub fn market(instrument: &str, side: Side, volume: Volume) -> Self {
        Order {
            id: OrderId::new(),
            timestamp: current_time_millis(),
            side,
            price: Price::ZERO,
            volume,
            filled: Volume::ZERO,
            order_type: OrderType::Market,
            flag: OrderFlag::None,
            instrument: instrument.to_string(),
            exchange: String::new(),
        }
    }

    /// Attach a time-in-force flag.
    #[must_use]
    pub fn with_flag(mut self, flag: OrderFlag) -> Self {
        self.flag = flag;
        self
    }

    /// Attach a venue name.
    #[must_use]
    pub fn with_exchange(mut self, exchange: &str) -> Self {
        self.exchange = exchange.to_string();
        self
    }

    /// Volume still open: `volume - filled`.
    #[must_use]
    pub fn remaining(&self) -> Volume {
        self.volume.saturating_sub(self.filled)
    }

    /// True once the order is terminal.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.filled >= self.volume
    }

    /// Would this order, as a taker, execute against a resting level at
    /// `level_price`? Equal prices cross. Market orders always cross.
    #[must_use]
    pub fn crosses(&self, level_price: Price) -> bool {
        match self.order_type {
            OrderType::Market => true,
            _ => match self.side {
                Side::Buy => self.price >= level_price,
                Side::Sell => self.price <= level_price,
            },
        }
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}@{} filled {}",
            self.id, self.order_type, self.side, self.volume, self.price, self.filled
        )
    }
}
