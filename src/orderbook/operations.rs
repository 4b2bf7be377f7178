//! Order book operations: submitting and cancelling orders.

use super::book::{OrderBook, SubmitResult, SubmitStatus};
use super::error::BookError;
use crate::types::{Order, OrderFlag, OrderId, OrderType, Side, Volume};
use tracing::{debug, trace};

impl OrderBook {
    /// Submit an order to the book.
    ///
    /// The order is walked against the opposite ladder from the best price
    /// outward. What happens to an unfilled remainder depends on the order's
    /// flag and type:
    ///
    /// - `FillOrKill` / `AllOrNone`: the whole submission is discarded. No
    ///   events are delivered and the book is left untouched (`Rejected`).
    /// - `ImmediateOrCancel`: fills stand, the remainder is cancelled with a
    ///   CANCEL event (`Canceled`).
    /// - limit orders rest the remainder on their own side with an OPEN event
    ///   (`Rested`).
    /// - market orders drop the remainder; if anything filled, a TRADE
    ///   summarising the partial execution is emitted (`Expired`).
    ///
    /// All events produced by the submission are delivered to the sink as one
    /// batch, in production order, after the outcome is decided.
    ///
    /// # Errors
    /// - [`BookError::UnsupportedOrderType`] for stop variants.
    /// - [`BookError::InvalidOrder`] for zero volume, a zero limit price, or
    ///   a non-zero `filled` on entry.
    /// - [`BookError::DuplicateOrderId`] if the id is already resting.
    pub fn submit(&mut self, order: Order) -> Result<SubmitResult, BookError> {
        self.validate(&order)?;
        trace!(
            "{}: submit {} {} {}@{} flag {}",
            self.instrument, order.order_type, order.side, order.volume, order.price, order.flag
        );

        let mut taker = order;
        let touched = self.match_against(&mut taker);

        let status = if taker.is_filled() {
            self.commit(taker.side, &touched);
            self.collector.flush();
            SubmitStatus::Filled
        } else {
            match taker.flag {
                OrderFlag::FillOrKill | OrderFlag::AllOrNone => {
                    // nothing was applied; discard the staged fills wholesale
                    debug!(
                        "{}: {} {} rejected, {} unfilled",
                        self.instrument,
                        taker.flag,
                        taker.id,
                        taker.remaining()
                    );
                    self.collector.clear();
                    SubmitStatus::Rejected
                }
                OrderFlag::ImmediateOrCancel => {
                    self.collector.push_cancel(&taker);
                    self.commit(taker.side, &touched);
                    self.collector.flush();
                    SubmitStatus::Canceled
                }
                OrderFlag::None => match taker.order_type {
                    OrderType::Limit => {
                        self.commit(taker.side, &touched);
                        self.rest(taker.clone());
                        self.collector.flush();
                        SubmitStatus::Rested
                    }
                    OrderType::Market => {
                        if !taker.filled.is_zero() {
                            self.collector.push_trade(&taker);
                        }
                        self.commit(taker.side, &touched);
                        self.collector.flush();
                        SubmitStatus::Expired
                    }
                    OrderType::StopMarket | OrderType::StopLimit => {
                        unreachable!("stop orders are refused at validation")
                    }
                },
            }
        };

        self.collector.clear();

        let (filled, remaining) = match status {
            SubmitStatus::Rejected => (Volume::ZERO, taker.volume),
            _ => (taker.filled, taker.remaining()),
        };
        Ok(SubmitResult {
            id: taker.id,
            status,
            filled,
            remaining,
        })
    }

    /// Remove a resting order, identified by its `(side, price, id)`.
    ///
    /// Emits one CANCEL event and returns the removed order. An emptied level
    /// is dropped from its ladder.
    ///
    /// # Errors
    /// Returns [`BookError::OutOfSync`] if no such level exists or the order
    /// is not in it; the book is left unchanged.
    pub fn cancel(&mut self, order: &Order) -> Result<Order, BookError> {
        let ladder = match order.side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let Some(level) = ladder.get_mut(order.price) else {
            return Err(BookError::OutOfSync {
                side: order.side,
                price: order.price,
                id: order.id,
            });
        };

        let removed = level.remove(order, &mut self.collector)?;
        if level.is_empty() {
            ladder.remove(order.price);
        }
        self.locations.remove(&removed.id);

        self.collector.flush();
        self.collector.clear();

        trace!("{}: cancelled {} at {}", self.instrument, removed.id, removed.price);
        Ok(removed)
    }

    /// Remove a resting order by id alone, using the location index.
    ///
    /// # Errors
    /// Returns [`BookError::OrderNotFound`] if the id is not resting.
    pub fn cancel_by_id(&mut self, id: OrderId) -> Result<Order, BookError> {
        let Some((side, price)) = self.order_location(id) else {
            return Err(BookError::OrderNotFound(id));
        };

        let ladder = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let level = ladder
            .get_mut(price)
            .unwrap_or_else(|| panic!("order book invariant violated: {id} located at missing level {price}"));
        let removed = level
            .remove_by_id(id, &mut self.collector)
            .unwrap_or_else(|| panic!("order book invariant violated: {id} located at {price} but not queued"));
        if level.is_empty() {
            ladder.remove(price);
        }
        self.locations.remove(&id);

        self.collector.flush();
        self.collector.clear();

        Ok(removed)
    }

    fn validate(&self, order: &Order) -> Result<(), BookError> {
        if matches!(order.order_type, OrderType::StopMarket | OrderType::StopLimit) {
            return Err(BookError::UnsupportedOrderType(order.order_type));
        }
        if order.volume.is_zero() {
            return Err(BookError::InvalidOrder {
                message: "volume must be positive".to_string(),
            });
        }
        if order.order_type == OrderType::Limit && order.price.is_zero() {
            return Err(BookError::InvalidOrder {
                message: "limit price must be positive".to_string(),
            });
        }
        if !order.filled.is_zero() {
            return Err(BookError::InvalidOrder {
                message: "order must be unfilled on entry".to_string(),
            });
        }
        if self.locations.contains_key(&order.id) {
            return Err(BookError::DuplicateOrderId(order.id));
        }
        Ok(())
    }
}
