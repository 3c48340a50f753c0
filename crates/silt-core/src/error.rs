//! Configuration error types.

use std::error::Error;
use std::fmt;

/// Errors from [`WorldConfig`](crate::WorldConfig) validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `tile_size` was zero.
    ZeroTileSize,
    /// `map_size` was zero.
    ZeroMapSize,
    /// `lod` was zero.
    ZeroLod,
    /// The level-of-detail stride does not divide the tile size, so a tile
    /// cannot be covered by a whole number of stored cells.
    LodMismatch {
        /// The configured tile edge length.
        tile_size: u32,
        /// The offending stride.
        lod: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTileSize => write!(f, "tile size must be nonzero"),
            Self::ZeroMapSize => write!(f, "map size must be nonzero"),
            Self::ZeroLod => write!(f, "level-of-detail stride must be nonzero"),
            Self::LodMismatch { tile_size, lod } => {
                write!(
                    f,
                    "level-of-detail stride {lod} does not divide tile size {tile_size}"
                )
            }
        }
    }
}

impl Error for ConfigError {}
