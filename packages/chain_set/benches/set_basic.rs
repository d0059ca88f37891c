//! Basic benchmarks for the `chain_set` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use chain_set::ChainSet;
use criterion::{Criterion, criterion_group, criterion_main};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_basic");

    group.bench_function("insert_10k_unique", |b| {
        b.iter(|| {
            let mut set = ChainSet::new();
            for key in 0..10_000_u64 {
                set.insert(black_box(key));
            }
            black_box(set)
        });
    });

    group.bench_function("lookup_hit", |b| {
        let mut set = ChainSet::new();
        for key in 0..10_000_u64 {
            set.insert(key);
        }

        b.iter(|| {
            let mut hits: usize = 0;
            for key in (0..10_000_u64).step_by(13) {
                if set.contains(black_box(&key)) {
                    hits = hits.wrapping_add(1);
                }
            }
            black_box(hits)
        });
    });

    group.bench_function("insert_remove_cycle", |b| {
        let mut set = ChainSet::new();

        b.iter(|| {
            for key in 0..1_000_u64 {
                set.insert(black_box(key));
            }
            for key in 0..1_000_u64 {
                set.remove(black_box(&key));
            }
        });
    });

    group.finish();
}
