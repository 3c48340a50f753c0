//! Criterion micro-benchmarks for pool allocation and span resolution.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use silt_core::Cell;
use silt_pool::Pool;

/// Benchmark: reserve a 1M-cell pool and carve it into 4096-cell spans.
fn bench_acquire_sweep(c: &mut Criterion) {
    c.bench_function("pool_acquire_sweep_1m", |b| {
        b.iter(|| {
            let mut pool = Pool::<Cell>::reserve(1 << 20);
            while let Some(span) = pool.acquire(4096) {
                black_box(span);
            }
            black_box(pool.used());
        });
    });
}

/// Benchmark: resolve a mid-pool span to a slice and sum one field.
fn bench_slice_resolution(c: &mut Criterion) {
    let mut pool = Pool::<Cell>::reserve(1 << 16);
    let _head = pool.acquire(1 << 15).unwrap();
    let span = pool.acquire(4096).unwrap();
    for cell in pool.slice_mut(span) {
        cell.height = 1.0;
    }

    c.bench_function("pool_slice_sum_4096", |b| {
        b.iter(|| {
            let total: f32 = pool.slice(span).iter().map(|cell| cell.height).sum();
            black_box(total);
        });
    });
}

criterion_group!(benches, bench_acquire_sweep, bench_slice_resolution);
criterion_main!(benches);
