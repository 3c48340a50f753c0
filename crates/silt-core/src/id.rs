//! Strongly-typed tile identifier.

use std::fmt;

/// Identifies a tile within a map.
///
/// Tiles are assigned sequential ids in insertion order when a map is
/// generated; `TileId(n)` is the n-th tile added. The rendering subsystem
/// keys whatever per-tile handle it manages (vertex buffers, index ranges)
/// by this id; the tile itself never owns that handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TileId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
