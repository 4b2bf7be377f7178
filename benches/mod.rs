//! Matching core benchmarks: resting inserts, aggressive walks, cancels.

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use matchbook_rs::prelude::*;
use std::hint::black_box;

fn seeded_book(levels: u64, orders_per_level: u64) -> OrderBook {
    let mut book = OrderBook::new("BENCH/USD");
    for i in 0..levels {
        for _ in 0..orders_per_level {
            let bid = Price::new(10_000 - (i + 1) * 10);
            let ask = Price::new(10_000 + (i + 1) * 10);
            book.submit(Order::limit("BENCH/USD", Side::Buy, bid, Volume::new(100)))
                .unwrap();
            book.submit(Order::limit("BENCH/USD", Side::Sell, ask, Volume::new(100)))
                .unwrap();
        }
    }
    book
}

fn bench_rest_only(c: &mut Criterion) {
    c.bench_function("rest_non_crossing_limit", |b| {
        let mut book = seeded_book(50, 2);
        b.iter(|| {
            let order = Order::limit("BENCH/USD", Side::Buy, Price::new(5_000), Volume::new(100));
            let id = order.id;
            book.submit(black_box(order)).unwrap();
            book.cancel_by_id(id).unwrap();
        });
    });
}

fn bench_aggressive_walk(c: &mut Criterion) {
    c.bench_function("market_sweep_three_levels", |b| {
        b.iter_batched(
            || seeded_book(10, 1),
            |mut book| {
                let order = Order::market("BENCH/USD", Side::Buy, Volume::new(250));
                book.submit(black_box(order)).unwrap();
                book
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_single_level_cross(c: &mut Criterion) {
    c.bench_function("cross_partial_at_best", |b| {
        let mut book = seeded_book(5, 1);
        // a huge resting bid absorbs every iteration's sell
        book.submit(Order::limit(
            "BENCH/USD",
            Side::Buy,
            Price::new(9_995),
            Volume::new(u32::MAX as u64),
        ))
        .unwrap();
        b.iter(|| {
            let order = Order::limit("BENCH/USD", Side::Sell, Price::new(9_995), Volume::new(1));
            book.submit(black_box(order)).unwrap();
        });
    });
}

fn bench_top_of_book(c: &mut Criterion) {
    c.bench_function("top_of_book", |b| {
        let book = seeded_book(100, 2);
        b.iter(|| black_box(book.top_of_book()));
    });
}

criterion_group!(
    benches,
    bench_rest_only,
    bench_aggressive_walk,
    bench_single_level_cross,
    bench_top_of_book
);
criterion_main!(benches);
