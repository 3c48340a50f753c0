//! World-positioned tiles.

use glam::IVec2;
use silt_core::TileId;
use silt_pool::Pool;

use crate::view::View;

/// A named rectangular region of world space owning one [`View`].
///
/// The node records its absolute world origin (`pos`) and world footprint
/// (`res`) and translates world coordinates into its view's local space by
/// `(p - pos) / scale`. Nodes are created when a map is populated and live
/// until the map is dropped. A node does not own whatever rendering handle
/// the display layer keeps for it; that handle is keyed by [`TileId`] and
/// managed externally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    id: TileId,
    pos: IVec2,
    res: IVec2,
    view: View,
}

impl Node {
    /// Create a node covering `res` world units from origin `pos`.
    pub fn new(id: TileId, pos: IVec2, res: IVec2, view: View) -> Self {
        Self { id, pos, res, view }
    }

    /// This tile's identifier.
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Absolute world origin.
    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    /// World-space footprint in world units.
    pub fn res(&self) -> IVec2 {
        self.res
    }

    /// The view over this tile's cells.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Level-of-detail stride: world units per stored cell.
    pub fn scale(&self) -> i32 {
        self.view.scale()
    }

    /// Translate a world coordinate into view-local space.
    ///
    /// Integer division truncates toward zero, so coordinates below the
    /// tile origin do not reliably land out of bounds; route through a
    /// [`Map`](crate::Map) or check [`Node::footprint_contains`] first
    /// when the coordinate may precede `pos`.
    pub fn world_to_local(&self, p: IVec2) -> IVec2 {
        (p - self.pos) / self.view.scale()
    }

    /// Whether a world coordinate falls outside this tile's view.
    pub fn out_of_bounds(&self, p: IVec2) -> bool {
        self.view.out_of_bounds(self.world_to_local(p))
    }

    /// Exact world-footprint test: `pos <= p < pos + res` on both axes.
    pub fn footprint_contains(&self, p: IVec2) -> bool {
        p.cmpge(self.pos).all() && p.cmplt(self.pos + self.res).all()
    }

    /// Resolve a world coordinate to its cell.
    pub fn get<'p, T>(&self, pool: &'p Pool<T>, p: IVec2) -> Option<&'p T> {
        self.view.get(pool, self.world_to_local(p))
    }

    /// Resolve a world coordinate to its cell, mutably.
    pub fn get_mut<'p, T>(&self, pool: &'p mut Pool<T>, p: IVec2) -> Option<&'p mut T> {
        self.view.get_mut(pool, self.world_to_local(p))
    }
}
