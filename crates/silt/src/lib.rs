//! Silt: an interleaved cell pool and tile index for grid hydrology
//! simulations.
//!
//! Silt stores a fixed-size world of per-cell state (terrain height,
//! water discharge, momentum) in one contiguous arena and addresses it by
//! absolute world coordinates through a tile map. A simulation mutates
//! cells in place; a renderer reads the same cells to build display
//! geometry. Neither pays a per-access allocation, and every access is
//! bounds-checked.
//!
//! # Quick start
//!
//! ```rust
//! use silt::prelude::*;
//!
//! // A 2x2-tile world, 4 world units per tile edge, full resolution.
//! let config = WorldConfig::new(4, 2, 1).unwrap();
//! let pool = Pool::<Cell>::reserve(config.total_cells());
//! let mut map = Map::generate(config, pool).unwrap();
//!
//! // The simulation writes through world coordinates.
//! map.cell_mut(IVec2::new(5, 5)).unwrap().height = 1.0;
//!
//! // The renderer reads derived values; the world edge is a defined
//! // default, not an error.
//! assert_eq!(map.height(IVec2::new(5, 5)), 1.0);
//! assert_eq!(map.height(IVec2::new(-1, 0)), 0.0);
//! let n = map.normal(IVec2::new(5, 5));
//! assert!((n.length() - 1.0).abs() < 1e-5);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `silt-core` | Cell record, `Terrain` seam, config, tile ids |
//! | [`pool`] | `silt-pool` | The bump arena and span handles |
//! | [`grid`] | `silt-grid` | Views, nodes, the map, reductions, tile meshes |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell record, configuration, and core types (`silt-core`).
pub use silt_core as types;

/// The bump arena and span handles (`silt-pool`).
pub use silt_pool as pool;

/// Views, nodes, the map, reductions, and tile meshes (`silt-grid`).
pub use silt_grid as grid;

/// Common imports for typical Silt usage.
///
/// ```rust
/// use silt::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use silt_core::{Cell, ConfigError, LookupMode, Terrain, TileId, WorldConfig};

    // Pool
    pub use silt_pool::{Pool, Span};

    // Grid and reductions
    pub use silt_grid::{
        normalized_discharge, surface_normal, tile_indices, tile_vertices, Map, MapError, Node,
        Relief, ReliefParams, Sampler, TileVertex, View,
    };

    // Coordinate and vector types
    pub use glam::{IVec2, Vec3};
}
