//! A single price level: the FIFO queue of resting orders at one price, and
//! the cross routine that executes them against an incoming taker.

use crate::orderbook::collector::EventCollector;
use crate::orderbook::error::BookError;
use crate::types::{Event, Order, OrderId, Price, Volume};
use std::collections::VecDeque;

/// The result of crossing a taker against one level, to be applied on commit.
///
/// [`PriceLevel::cross`] never mutates the level; it describes the mutation
/// here and the book applies it only once the submission's time-in-force
/// policy has allowed the fills. A discarded submission needs no rollback.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LevelExecution {
    /// Head orders fully consumed, in FIFO order.
    pub consumed: usize,
    /// Additional fill for the order behind the consumed head, if any.
    pub partial: Option<Volume>,
}

/// All resting orders on one side at one price, in time priority.
///
/// Invariant: every queued order has `filled < volume` and carries this
/// level's price.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    price: Price,
    orders: VecDeque<Order>,
}

impl PriceLevel {
    /// Create an empty level at `price`.
    #[must_use]
    pub fn new(price: Price) -> Self {
        PriceLevel {
            price,
            orders: VecDeque::new(),
        }
    }

    /// The level's price.
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Visible volume: the sum of `volume - filled` across resting orders.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.orders.iter().map(Order::remaining).sum()
    }

    /// Number of resting orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// True when no orders rest here.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Resting orders in time priority.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Append `order` to the tail and stage OPEN.
    ///
    /// If an order with the same id already rests here, the stored order is
    /// replaced in place, keeping its queue position, and CHANGE is staged
    /// instead (amend in place).
    pub fn add(&mut self, order: Order, events: &mut EventCollector) {
        debug_assert_eq!(order.price, self.price, "order price must match level");
        debug_assert!(!order.is_filled(), "terminal order added to level");

        if let Some(existing) = self.orders.iter_mut().find(|o| o.id == order.id) {
            *existing = order.clone();
            events.push(Event::Change(order));
        } else {
            events.push(Event::Open(order.clone()));
            self.orders.push_back(order);
        }
    }

    /// Remove the specific order from the queue and stage CANCEL.
    ///
    /// # Errors
    /// Returns [`BookError::OutOfSync`] if `order` does not carry this
    /// level's price or is not in the queue. Nothing is staged on failure.
    pub fn remove(&mut self, order: &Order, events: &mut EventCollector) -> Result<Order, BookError> {
        if order.price != self.price {
            return Err(BookError::OutOfSync {
                side: order.side,
                price: order.price,
                id: order.id,
            });
        }
        self.remove_by_id(order.id, events).ok_or(BookError::OutOfSync {
            side: order.side,
            price: self.price,
            id: order.id,
        })
    }

    /// Remove the order with `id`, staging CANCEL. Returns the removed order,
    /// or `None` if no such order rests here.
    pub(crate) fn remove_by_id(&mut self, id: OrderId, events: &mut EventCollector) -> Option<Order> {
        let position = self.orders.iter().position(|o| o.id == id)?;
        let removed = self.orders.remove(position).expect("position in bounds");
        events.push(Event::Cancel(removed.clone()));
        Some(removed)
    }

    /// Execute resting orders against `taker` in FIFO order, on shadow copies.
    ///
    /// Advances `taker.filled`, stages FILL/CHANGE events for taker and
    /// makers, and when the taker completes stages the submission's TRADE
    /// after the fills. The queue itself is untouched; the returned
    /// [`LevelExecution`] is applied via [`apply`](Self::apply) once the book
    /// commits.
    ///
    /// The loop ends when the taker is full or every maker here is consumed.
    pub(crate) fn cross(&self, taker: &mut Order, events: &mut EventCollector) -> LevelExecution {
        let mut execution = LevelExecution::default();

        for maker in &self.orders {
            if taker.is_filled() {
                break;
            }

            let to_fill = taker.remaining();
            let mut maker = maker.clone();
            let maker_remaining = maker.remaining();

            if maker_remaining > to_fill {
                // maker partially fills; taker is done
                maker.filled += to_fill;
                taker.filled += to_fill;
                execution.partial = Some(to_fill);
                events.push(Event::Fill(taker.clone()));
                events.push(Event::Change(maker.clone()));
                events.record_maker(&maker);
            } else if maker_remaining < to_fill {
                // maker fully executed; taker keeps going
                maker.filled = maker.volume;
                taker.filled += maker_remaining;
                execution.consumed += 1;
                events.push(Event::Change(taker.clone()));
                events.push(Event::Fill(maker.clone()));
                events.record_maker(&maker);
            } else {
                // exactly equal, both complete
                maker.filled = maker.volume;
                taker.filled += to_fill;
                execution.consumed += 1;
                events.push(Event::Fill(taker.clone()));
                events.push(Event::Fill(maker.clone()));
                events.record_maker(&maker);
            }
        }

        if taker.is_filled() {
            events.push_trade(taker);
        }

        execution
    }

    /// Apply a committed execution: pop consumed heads and advance the fill
    /// of the next order. Returns the ids of the consumed (terminal) orders.
    pub(crate) fn apply(&mut self, execution: &LevelExecution) -> Vec<OrderId> {
        let mut consumed = Vec::with_capacity(execution.consumed);
        for _ in 0..execution.consumed {
            let order = self
                .orders
                .pop_front()
                .unwrap_or_else(|| panic!("order book invariant violated: level {} shorter than its execution", self.price));
            consumed.push(order.id);
        }
        if let Some(partial) = execution.partial {
            let head = self
                .orders
                .front_mut()
                .unwrap_or_else(|| panic!("order book invariant violated: partial fill on empty level {}", self.price));
            head.filled += partial;
            debug_assert!(head.filled < head.volume, "partial fill made maker terminal");
        }
        consumed
    }
}

impl PartialEq for PriceLevel {
    fn eq(&self, other: &Self) -> bool {
        self.price == other.price
    }
}

impl Eq for PriceLevel {}
