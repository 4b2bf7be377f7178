//! Order book error types.

use crate::types::{OrderId, OrderType, Price, Side};
use thiserror::Error;

/// Errors that can occur within the OrderBook.
///
/// Every error leaves the book in its pre-call state. Time-in-force
/// rejections (fill-or-kill, all-or-none) are not errors; they are reported
/// as [`SubmitStatus::Rejected`](crate::SubmitStatus::Rejected) with no events
/// delivered.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BookError {
    /// A cancel targeted a level or order that is not on the book. The caller
    /// and the book disagree about what is resting.
    #[error("order book out of sync: no resting {side} order {id} at {price}")]
    OutOfSync {
        /// Side the caller expected the order on.
        side: Side,
        /// Price level the caller expected.
        price: Price,
        /// The order that was not found.
        id: OrderId,
    },

    /// A cancel-by-id targeted an order that is not resting anywhere.
    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    /// Stop variants are reserved but not implemented.
    #[error("unsupported order type: {0}")]
    UnsupportedOrderType(OrderType),

    /// A submission violated an entry precondition.
    #[error("invalid order: {message}")]
    InvalidOrder {
        /// Which precondition failed.
        message: String,
    },

    /// A submission reused the id of an order currently resting on the book.
    #[error("duplicate order id: {0} is already resting")]
    DuplicateOrderId(OrderId),
}
