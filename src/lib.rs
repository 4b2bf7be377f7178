//! # Limit Order Book Matching Core
//!
//! A price-time priority matching core for a single financial instrument on a
//! single venue. Incoming orders are crossed against resting liquidity, partial
//! fills are tracked exactly, and every book mutation is published as a stream
//! of lifecycle events (open, fill, change, cancel, trade) that downstream
//! observers can consume without ever seeing a half-applied submission.
//!
//! ## Key Features
//!
//! - **Price-time priority matching**: two sorted price ladders per book, FIFO
//!   queues within each price level, best price and earliest arrival win.
//!
//! - **Order types and time-in-force**: limit and market orders with
//!   fill-or-kill, all-or-none, and immediate-or-cancel flags. Stop variants
//!   are reserved and refused at submission.
//!
//! - **Atomic event batches**: events produced during one submission are
//!   staged in a collector and either delivered in full or discarded in full.
//!   A rejected fill-or-kill leaves the book byte-identical and publishes
//!   nothing.
//!
//! - **Exact fixed-point arithmetic**: prices and volumes are scaled integers
//!   ([`Price`], [`Volume`]), so ladder ordering and fill bookkeeping never
//!   depend on floating-point comparison.
//!
//! - **Queryable depth**: top of book, spread, per-level quotes, cumulative
//!   depth iterators, serializable depth snapshots, and a human-readable
//!   ladder render with aggregated outer levels.
//!
//! ## Scheduling Model
//!
//! A book is owned by a single logical executor. `submit` and `cancel` run to
//! completion without yielding; event delivery to the registered sink is
//! synchronous within the same submission. If the sink hands events to another
//! executor, that is the sink's concern: the listener type is an
//! `Arc<dyn Fn(&Event) + Send + Sync>` so it can be shared across threads.
//!
//! ## Example
//!
//! ```
//! use matchbook_rs::prelude::*;
//!
//! let mut book = OrderBook::new("BTC/USD");
//!
//! let bid = Order::limit("BTC/USD", Side::Buy, Price::from_f64(5.0), Volume::from_f64(1.0));
//! book.submit(bid.clone()).unwrap();
//!
//! let ask = Order::limit("BTC/USD", Side::Sell, Price::from_f64(5.0), Volume::from_f64(0.5));
//! let result = book.submit(ask).unwrap();
//!
//! assert_eq!(result.status, SubmitStatus::Filled);
//! assert_eq!(book.top_of_book().bid.unwrap().volume, Volume::from_f64(0.5));
//! ```

pub mod orderbook;
pub mod types;

pub mod prelude;
mod utils;

pub use orderbook::depth::{DepthSnapshot, Quote, TopOfBook};
pub use orderbook::iterators::LevelInfo;
pub use orderbook::serialization::{EventSerializer, JsonEventSerializer, SerializationError};
pub use orderbook::{
    BookError, EventCollector, OrderBook, PriceLevel, SubmitResult, SubmitStatus,
};
pub use types::{
    Event, EventKind, EventListener, Order, OrderFlag, OrderId, OrderType, Price, Side, Trade,
    Volume,
};
pub use utils::current_time_millis;
