//! Benchmark profiles and utilities for the Silt terrain store.
//!
//! Provides pre-built world profiles and a deterministic terrain fill:
//!
//! - [`reference_world`]: the reference 2x2-tile, 512-unit world at
//!   stride 2 (~262K stored cells)
//! - [`small_world`]: a 2x2-tile, 64-unit world for cheap setup
//! - [`fill_terrain`]: seeded pseudo-random heights and discharge

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use glam::IVec2;
use silt_core::{Cell, WorldConfig};
use silt_grid::Map;
use silt_pool::Pool;

/// Build the reference profile: a 2x2 grid of 512-unit tiles at stride 2.
pub fn reference_world() -> Map<Cell> {
    let config = WorldConfig::default();
    let pool = Pool::reserve(config.total_cells());
    Map::generate(config, pool).expect("pool sized from config cannot exhaust")
}

/// Build a small profile: a 2x2 grid of 64-unit tiles at stride 2.
pub fn small_world() -> Map<Cell> {
    let config = WorldConfig::new(64, 2, 2).expect("static profile is valid");
    let pool = Pool::reserve(config.total_cells());
    Map::generate(config, pool).expect("pool sized from config cannot exhaust")
}

/// Splitmix-style hash for deterministic cell values.
fn hash(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}

/// Fill every stored cell with seeded pseudo-random height and discharge.
///
/// Heights land in `[0, 1)` and discharge in `[0, 4)`. The same seed
/// always produces the same terrain.
pub fn fill_terrain(map: &mut Map<Cell>, seed: u64) {
    let extent = map.config().world_extent() as i32;
    let lod = map.config().lod as usize;
    let mut state = seed;
    for y in (0..extent).step_by(lod) {
        for x in (0..extent).step_by(lod) {
            let h = (hash(&mut state) >> 40) as f32 / (1u64 << 24) as f32;
            let d = (hash(&mut state) >> 40) as f32 / (1u64 << 22) as f32;
            let cell = map
                .cell_mut(IVec2::new(x, y))
                .expect("coordinate inside the generated world");
            cell.height = h;
            cell.discharge = d;
        }
    }
}
