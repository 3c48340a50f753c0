//! Criterion micro-benchmarks for map routing, reductions, and tile
//! geometry.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::IVec2;
use silt_bench::{fill_terrain, small_world};
use silt_core::{LookupMode, TileId, WorldConfig};
use silt_grid::{tile_indices, tile_vertices, Map};
use silt_pool::Pool;

/// Benchmark: route and read one cell through grid arithmetic.
fn bench_grid_lookup(c: &mut Criterion) {
    let mut map = small_world();
    fill_terrain(&mut map, 42);

    c.bench_function("map_cell_grid", |b| {
        b.iter(|| {
            let cell = map.cell(black_box(IVec2::new(70, 42)));
            black_box(cell);
        });
    });
}

/// Benchmark: the same lookup through the footprint scan.
fn bench_scan_lookup(c: &mut Criterion) {
    let config = WorldConfig::new(64, 2, 2)
        .expect("static profile is valid")
        .with_lookup(LookupMode::Scan);
    let pool = Pool::reserve(config.total_cells());
    let mut map = Map::generate(config, pool).expect("pool sized from config cannot exhaust");
    fill_terrain(&mut map, 42);

    c.bench_function("map_cell_scan", |b| {
        b.iter(|| {
            let cell = map.cell(black_box(IVec2::new(70, 42)));
            black_box(cell);
        });
    });
}

/// Benchmark: the four-quadrant normal at a world-interior point.
fn bench_surface_normal(c: &mut Criterion) {
    let mut map = small_world();
    fill_terrain(&mut map, 42);

    c.bench_function("map_normal", |b| {
        b.iter(|| {
            let n = map.normal(black_box(IVec2::new(64, 64)));
            black_box(n);
        });
    });
}

/// Benchmark: rebuild one tile's vertex grid and triangulation.
fn bench_tile_geometry(c: &mut Criterion) {
    let mut map = small_world();
    fill_terrain(&mut map, 42);

    c.bench_function("tile_geometry", |b| {
        b.iter(|| {
            let sampler = map.sampler(TileId(0)).unwrap();
            let vertices = tile_vertices(&sampler);
            let indices = tile_indices(sampler.node().res(), sampler.params().step);
            black_box((vertices, indices));
        });
    });
}

criterion_group!(
    benches,
    bench_grid_lookup,
    bench_scan_lookup,
    bench_surface_normal,
    bench_tile_geometry
);
criterion_main!(benches);
