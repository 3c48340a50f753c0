//! World geometry configuration.

use crate::error::ConfigError;

/// How a map routes a world coordinate to its owning tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LookupMode {
    /// Tiles partition the world on a uniform grid anchored at the origin;
    /// lookup is pure index arithmetic. Tiles must be added in row-major
    /// grid order.
    #[default]
    Grid,
    /// Tiles form an open collection with arbitrary placement; lookup
    /// searches node footprints in insertion order.
    Scan,
}

/// World and tile geometry, fixed at startup.
///
/// One value of this type is constructed by the hosting application and
/// threaded through pool sizing and map construction. All quantities are
/// in world units (one unit per finest-resolution cell).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldConfig {
    /// World units per tile edge.
    pub tile_size: u32,
    /// Tiles per row and per column of the world.
    pub map_size: u32,
    /// Level-of-detail stride: world units spanned by one stored cell.
    pub lod: u32,
    /// Vertical exaggeration applied to heights when building normals and
    /// vertex positions.
    pub relief_scale: f32,
    /// Coordinate-to-tile routing strategy.
    pub lookup: LookupMode,
}

impl WorldConfig {
    /// Default world units per tile edge.
    pub const DEFAULT_TILE_SIZE: u32 = 512;

    /// Default tiles per row.
    pub const DEFAULT_MAP_SIZE: u32 = 2;

    /// Default level-of-detail stride.
    pub const DEFAULT_LOD: u32 = 2;

    /// Default vertical exaggeration.
    pub const DEFAULT_RELIEF_SCALE: f32 = 80.0;

    /// Create a validated configuration with grid lookup and the default
    /// relief scale.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any dimension is zero or `lod` does
    /// not divide `tile_size`.
    pub fn new(tile_size: u32, map_size: u32, lod: u32) -> Result<Self, ConfigError> {
        if tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if map_size == 0 {
            return Err(ConfigError::ZeroMapSize);
        }
        if lod == 0 {
            return Err(ConfigError::ZeroLod);
        }
        if tile_size % lod != 0 {
            return Err(ConfigError::LodMismatch { tile_size, lod });
        }
        Ok(Self {
            tile_size,
            map_size,
            lod,
            relief_scale: Self::DEFAULT_RELIEF_SCALE,
            lookup: LookupMode::Grid,
        })
    }

    /// Replace the vertical exaggeration.
    pub fn with_relief_scale(mut self, relief_scale: f32) -> Self {
        self.relief_scale = relief_scale;
        self
    }

    /// Replace the lookup mode.
    pub fn with_lookup(mut self, lookup: LookupMode) -> Self {
        self.lookup = lookup;
        self
    }

    /// Stored cells per tile edge (`tile_size / lod`).
    pub fn view_res(&self) -> u32 {
        self.tile_size / self.lod
    }

    /// Stored cells per tile.
    pub fn cells_per_tile(&self) -> u32 {
        self.view_res() * self.view_res()
    }

    /// Number of tiles in the world.
    pub fn tile_count(&self) -> u32 {
        self.map_size * self.map_size
    }

    /// World units per world edge (`map_size * tile_size`).
    pub fn world_extent(&self) -> u32 {
        self.map_size * self.tile_size
    }

    /// Total stored cells across all tiles; the pool capacity a full world
    /// requires.
    pub fn total_cells(&self) -> u32 {
        self.tile_count() * self.cells_per_tile()
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tile_size: Self::DEFAULT_TILE_SIZE,
            map_size: Self::DEFAULT_MAP_SIZE,
            lod: Self::DEFAULT_LOD,
            relief_scale: Self::DEFAULT_RELIEF_SCALE,
            lookup: LookupMode::Grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_world() {
        let config = WorldConfig::default();
        assert_eq!(config.tile_size, 512);
        assert_eq!(config.map_size, 2);
        assert_eq!(config.lod, 2);
        assert_eq!(config.view_res(), 256);
        assert_eq!(config.cells_per_tile(), 65_536);
        assert_eq!(config.world_extent(), 1024);
        assert_eq!(config.total_cells(), 262_144);
    }

    #[test]
    fn new_validates_dimensions() {
        assert_eq!(WorldConfig::new(0, 2, 1), Err(ConfigError::ZeroTileSize));
        assert_eq!(WorldConfig::new(4, 0, 1), Err(ConfigError::ZeroMapSize));
        assert_eq!(WorldConfig::new(4, 2, 0), Err(ConfigError::ZeroLod));
        assert_eq!(
            WorldConfig::new(5, 2, 2),
            Err(ConfigError::LodMismatch {
                tile_size: 5,
                lod: 2
            })
        );
    }

    #[test]
    fn lod_divides_tile_size_into_view_res() {
        let config = WorldConfig::new(16, 3, 4).unwrap();
        assert_eq!(config.view_res(), 4);
        assert_eq!(config.cells_per_tile(), 16);
        assert_eq!(config.total_cells(), 9 * 16);
    }

    #[test]
    fn builders_replace_fields() {
        let config = WorldConfig::new(8, 1, 1)
            .unwrap()
            .with_relief_scale(40.0)
            .with_lookup(LookupMode::Scan);
        assert_eq!(config.relief_scale, 40.0);
        assert_eq!(config.lookup, LookupMode::Scan);
    }
}
