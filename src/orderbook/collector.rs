//! Event staging for atomic per-submission delivery.

use crate::types::{Event, EventListener, Order, Trade};
use crate::utils::current_time_millis;

/// Buffers the events produced while one submission is being matched, so the
/// book can commit or discard them as a unit.
///
/// Exactly one of [`flush`](Self::flush) or [`clear`](Self::clear) delivers
/// per submission, and `clear` always runs at the end of a submission, so the
/// buffer is empty on return. A sink never observes an event from a
/// submission that time-in-force policy cancelled.
pub struct EventCollector {
    listener: Option<EventListener>,
    staged: Vec<Event>,
    last_maker: Option<Order>,
}

impl EventCollector {
    /// Create a collector delivering to `listener`, if any.
    #[must_use]
    pub fn new(listener: Option<EventListener>) -> Self {
        EventCollector {
            listener,
            staged: Vec::new(),
            last_maker: None,
        }
    }

    /// Replace the event sink. Applies from the next flush on.
    pub fn set_callback(&mut self, listener: EventListener) {
        self.listener = Some(listener);
    }

    /// Stage an event for delivery at the next flush.
    pub fn push(&mut self, event: Event) {
        self.staged.push(event);
    }

    /// Record the maker most recently touched by a cross. Trades synthesized
    /// by [`push_trade`](Self::push_trade) are priced off this snapshot.
    pub(crate) fn record_maker(&mut self, maker: &Order) {
        self.last_maker = Some(maker.clone());
    }

    /// Stage a CANCEL for an unfilled remainder (immediate-or-cancel).
    pub fn push_cancel(&mut self, order: &Order) {
        self.staged.push(Event::Cancel(order.clone()));
    }

    /// Synthesize and stage the TRADE summarising `taker`'s execution.
    ///
    /// The trade's price is the last-touched maker's price and its volume is
    /// the taker's total fill for the submission. Does nothing if no maker
    /// has been touched.
    pub fn push_trade(&mut self, taker: &Order) {
        let Some(maker) = &self.last_maker else {
            return;
        };
        self.staged.push(Event::Trade(Trade {
            timestamp: current_time_millis(),
            instrument: taker.instrument.clone(),
            price: maker.price,
            volume: taker.filled,
            side: taker.side,
            maker_order: maker.clone(),
            taker_order: taker.clone(),
            exchange: maker.exchange.clone(),
        }));
    }

    /// Deliver all staged events to the sink, in insertion order.
    ///
    /// Events are drained; without a registered sink they are dropped.
    pub fn flush(&mut self) {
        if let Some(listener) = &self.listener {
            for event in self.staged.drain(..) {
                listener(&event);
            }
        } else {
            self.staged.clear();
        }
    }

    /// Drop the buffer without delivery.
    pub fn clear(&mut self) {
        self.staged.clear();
        self.last_maker = None;
    }

    /// Events currently staged.
    #[must_use]
    pub fn staged(&self) -> &[Event] {
        &self.staged
    }

    /// True when nothing is staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }
}

impl std::fmt::Debug for EventCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventCollector")
            .field("staged", &self.staged.len())
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
