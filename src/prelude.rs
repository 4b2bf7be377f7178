//! Prelude module that re-exports commonly used types.
//!
//! Instead of importing each type individually, use:
//!
//! ```rust
//! use matchbook_rs::prelude::*;
//! ```

// Core order book types
pub use crate::orderbook::{BookError, EventCollector, OrderBook, PriceLevel};
pub use crate::orderbook::{SubmitResult, SubmitStatus};

// Depth views
pub use crate::orderbook::depth::{DepthSnapshot, Quote, TopOfBook};
pub use crate::orderbook::iterators::LevelInfo;

// Serialization
pub use crate::orderbook::serialization::{
    EventSerializer, JsonEventSerializer, SerializationError,
};

// Value types
pub use crate::types::{
    Event, EventKind, EventListener, Order, OrderFlag, OrderId, OrderType, Price, Side, Trade,
    Volume,
};

// Utility functions
pub use crate::utils::current_time_millis;
