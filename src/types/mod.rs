//! Value types shared by the matching core: fixed-point units, orders,
//! trades, and lifecycle events.

mod event;
mod order;
mod trade;
mod units;

pub use event::{Event, EventKind, EventListener};
pub use order::{Order, OrderFlag, OrderId, OrderType, Side};
pub use trade::Trade;
pub use units::{Price, Volume};
