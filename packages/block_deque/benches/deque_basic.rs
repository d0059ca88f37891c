//! Basic benchmarks for the `block_deque` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use block_deque::BlockDeque;
use criterion::{Criterion, criterion_group, criterion_main};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque_basic");

    group.bench_function("push_back_10k", |b| {
        b.iter(|| {
            let mut deque = BlockDeque::new();
            for _ in 0..10_000 {
                deque.push_back(black_box(TEST_VALUE));
            }
            black_box(deque)
        });
    });

    group.bench_function("push_both_ends_10k", |b| {
        b.iter(|| {
            let mut deque = BlockDeque::new();
            for _ in 0..5_000 {
                deque.push_back(black_box(TEST_VALUE));
                deque.push_front(black_box(TEST_VALUE));
            }
            black_box(deque)
        });
    });

    group.bench_function("random_access", |b| {
        let mut deque = BlockDeque::new();
        for value in 0..10_000 {
            deque.push_back(value);
        }

        b.iter(|| {
            let mut sum: usize = 0;
            for position in (0..10_000).step_by(7) {
                sum = sum.wrapping_add(*deque.get(black_box(position)));
            }
            black_box(sum)
        });
    });

    group.finish();
}
