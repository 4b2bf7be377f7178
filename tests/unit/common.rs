//! Shared fixtures: a seeded book and an event-capturing sink.

use matchbook_rs::prelude::*;
use std::sync::{Arc, Mutex};

pub fn px(value: f64) -> Price {
    Price::from_f64(value)
}

pub fn vol(value: f64) -> Volume {
    Volume::from_f64(value)
}

/// An event sink that records everything it receives.
#[derive(Clone)]
pub struct EventCapture {
    events: Arc<Mutex<Vec<Event>>>,
}

impl EventCapture {
    pub fn new() -> Self {
        EventCapture {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn listener(&self) -> EventListener {
        let events = Arc::clone(&self.events);
        Arc::new(move |event: &Event| {
            events.lock().unwrap().push(event.clone());
        })
    }

    /// Drain and return everything captured so far.
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

/// A book seeded with the reference depth:
/// bids 5.0 x 1.0 and 4.5 x 1.0, asks 5.5 x 1.0, 6.0 x 1.0, 6.5 x 1.0.
pub struct SeededBook {
    pub book: OrderBook,
    pub capture: EventCapture,
    /// The seed orders, in submission order (two buys then three sells).
    pub seeds: Vec<Order>,
}

pub fn seeded_book() -> SeededBook {
    let capture = EventCapture::new();
    let mut book = OrderBook::with_listener("BTC/USD", capture.listener());

    let seeds = vec![
        Order::limit("BTC/USD", Side::Buy, px(5.0), vol(1.0)),
        Order::limit("BTC/USD", Side::Buy, px(4.5), vol(1.0)),
        Order::limit("BTC/USD", Side::Sell, px(5.5), vol(1.0)),
        Order::limit("BTC/USD", Side::Sell, px(6.0), vol(1.0)),
        Order::limit("BTC/USD", Side::Sell, px(6.5), vol(1.0)),
    ];
    for order in &seeds {
        let result = book.submit(order.clone()).unwrap();
        assert_eq!(result.status, SubmitStatus::Rested);
    }
    capture.take();

    SeededBook {
        book,
        capture,
        seeds,
    }
}

/// The kinds of a captured event sequence, for compact assertions.
pub fn kinds(events: &[Event]) -> Vec<EventKind> {
    events.iter().map(Event::kind).collect()
}
