//! The tile index: world-coordinate routing over a node collection.

use glam::{IVec2, Vec3};
use indexmap::IndexMap;
use silt_core::{LookupMode, Terrain, TileId, WorldConfig};
use silt_pool::Pool;

use crate::error::MapError;
use crate::node::Node;
use crate::relief::{normalized_discharge, surface_normal, Relief, ReliefParams, Sampler};
use crate::view::View;

/// A collection of tiles covering a bounding region of world space.
///
/// The map owns the cell pool and an insertion-ordered collection of
/// nodes, and routes world coordinates to the owning node according to
/// the configured [`LookupMode`]. The bounding box is the exact
/// axis-aligned union of all added node footprints; it grows with each
/// [`Map::add`] and never shrinks.
///
/// In [`LookupMode::Grid`], routing is pure arithmetic over a uniform
/// tile grid anchored at the origin, which requires tiles to be added in
/// row-major `(x * map_size + y)` order, a precondition the map checks
/// in debug builds only. [`Map::generate`] constructs a whole world in
/// that order.
pub struct Map<T> {
    config: WorldConfig,
    params: ReliefParams,
    pool: Pool<T>,
    nodes: IndexMap<TileId, Node>,
    min: IVec2,
    max: IVec2,
}

impl<T> Map<T> {
    /// Create an empty map over an already-reserved pool.
    pub fn new(config: WorldConfig, pool: Pool<T>) -> Self {
        Self {
            config,
            params: ReliefParams::from_config(&config),
            pool,
            nodes: IndexMap::new(),
            min: IVec2::MAX,
            max: IVec2::MIN,
        }
    }

    /// Build the full tile grid the configuration describes, acquiring
    /// one span per tile from `pool`.
    ///
    /// Tiles are created in row-major grid order with sequential
    /// [`TileId`]s, so grid routing and id lookup agree.
    ///
    /// # Errors
    ///
    /// [`MapError::PoolExhausted`] if the pool cannot back every tile;
    /// a pool of [`WorldConfig::total_cells`] capacity always suffices.
    pub fn generate(config: WorldConfig, pool: Pool<T>) -> Result<Self, MapError> {
        let mut map = Self::new(config, pool);
        let tile = config.tile_size as i32;
        let count = config.cells_per_tile();
        for i in 0..config.map_size as i32 {
            for j in 0..config.map_size as i32 {
                let span = map
                    .pool
                    .acquire(count)
                    .ok_or_else(|| MapError::PoolExhausted {
                        requested: count as usize,
                        remaining: map.pool.remaining(),
                    })?;
                let view = View::new(
                    span,
                    IVec2::splat(config.view_res() as i32),
                    config.lod as i32,
                );
                let id = TileId((i * config.map_size as i32 + j) as u32);
                map.add(Node::new(id, tile * IVec2::new(i, j), IVec2::splat(tile), view));
            }
        }
        Ok(map)
    }

    /// Append a node and extend the bounding box over its footprint.
    ///
    /// No overlap detection is performed; callers in grid mode must add
    /// tiles on the uniform grid in row-major order (checked by
    /// `debug_assert` only).
    ///
    /// # Panics
    ///
    /// Panics if a node with the same [`TileId`] was already added;
    /// a duplicate id would silently corrupt grid routing.
    pub fn add(&mut self, node: Node) {
        if self.config.lookup == LookupMode::Grid {
            let tile = self.config.tile_size as i32;
            debug_assert!(
                node.pos() % tile == IVec2::ZERO,
                "tile at {} is not aligned to the {tile}-unit grid",
                node.pos()
            );
            debug_assert!(
                node.res() == IVec2::splat(tile),
                "tile at {} does not span one grid cell",
                node.pos()
            );
            let cell = node.pos() / tile;
            debug_assert!(
                (cell.x * self.config.map_size as i32 + cell.y) as usize == self.nodes.len(),
                "tiles must be added in row-major grid order"
            );
        }
        self.min = self.min.min(node.pos());
        self.max = self.max.max(node.pos() + node.res());
        let prev = self.nodes.insert(node.id(), node);
        assert!(prev.is_none(), "duplicate TileId({})", node.id());
    }

    /// Whether a world coordinate falls outside the bounding box
    /// `[min, max)` of all added tiles.
    pub fn out_of_bounds(&self, p: IVec2) -> bool {
        self.nodes.is_empty() || p.cmplt(self.min).any() || p.cmpge(self.max).any()
    }

    /// Route a world coordinate to its owning node.
    ///
    /// Returns `None` when the coordinate is out of bounds. In grid mode
    /// the result is undefined (by design, not checked) if tiles were
    /// added off-grid or out of order.
    pub fn node(&self, p: IVec2) -> Option<&Node> {
        if self.out_of_bounds(p) {
            return None;
        }
        match self.config.lookup {
            LookupMode::Grid => {
                let cell = p / self.config.tile_size as i32;
                let ind = (cell.x * self.config.map_size as i32 + cell.y) as usize;
                self.nodes.get_index(ind).map(|(_, node)| node)
            }
            LookupMode::Scan => self.nodes.values().find(|n| n.footprint_contains(p)),
        }
    }

    /// Look up a node by its id.
    pub fn node_by_id(&self, id: TileId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Number of tiles added so far.
    pub fn tile_count(&self) -> usize {
        self.nodes.len()
    }

    /// Lower corner of the bounding box (inclusive).
    pub fn min(&self) -> IVec2 {
        self.min
    }

    /// Upper corner of the bounding box (exclusive).
    pub fn max(&self) -> IVec2 {
        self.max
    }

    /// The configuration this map was built with.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The pool backing this map's tiles.
    pub fn pool(&self) -> &Pool<T> {
        &self.pool
    }

    /// The cell at a world coordinate.
    pub fn cell(&self, p: IVec2) -> Option<&T> {
        self.node(p)?.get(&self.pool, p)
    }

    /// The cell at a world coordinate, mutably.
    ///
    /// This is the simulation's write path; the returned address is
    /// stable for the lifetime of the map.
    pub fn cell_mut(&mut self, p: IVec2) -> Option<&mut T> {
        let node = self.node(p)?;
        let local = node.world_to_local(p);
        let view = *node.view();
        view.get_mut(&mut self.pool, local)
    }

    /// A per-tile sampler for the renderer.
    pub fn sampler(&self, id: TileId) -> Option<Sampler<'_, T>> {
        Some(Sampler::new(self.node_by_id(id)?, &self.pool, self.params))
    }
}

impl<T: Terrain> Map<T> {
    /// Terrain elevation at a world coordinate; 0.0 out of bounds.
    pub fn height(&self, p: IVec2) -> f32 {
        self.cell(p).map(Terrain::height).unwrap_or(0.0)
    }

    /// Normalized discharge at a world coordinate; 0.0 out of bounds.
    pub fn discharge(&self, p: IVec2) -> f32 {
        normalized_discharge(self.cell(p).map(Terrain::discharge).unwrap_or(0.0))
    }

    /// Surface normal at a world coordinate, averaged across tile seams.
    ///
    /// Unlike a per-tile [`Sampler`], the map-level reduction sees the
    /// whole world, so quadrants reaching into a neighbouring tile still
    /// contribute.
    pub fn normal(&self, p: IVec2) -> Vec3 {
        surface_normal(self, p, &self.params)
    }
}

impl<T: Terrain> Relief for Map<T> {
    fn out_of_bounds(&self, p: IVec2) -> bool {
        Map::out_of_bounds(self, p)
    }

    fn height(&self, p: IVec2) -> f32 {
        Map::height(self, p)
    }

    fn discharge(&self, p: IVec2) -> f32 {
        Map::discharge(self, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use silt_core::Cell;

    /// A 2x2 grid of 4x4-cell tiles from a 64-cell pool, full resolution.
    fn small_world(lookup: LookupMode) -> Map<Cell> {
        let config = WorldConfig::new(4, 2, 1).unwrap().with_lookup(lookup);
        let pool = Pool::reserve(config.total_cells());
        Map::generate(config, pool).unwrap()
    }

    #[test]
    fn generate_covers_the_world_exactly() {
        let map = small_world(LookupMode::Grid);
        assert_eq!(map.tile_count(), 4);
        assert_eq!(map.min(), IVec2::ZERO);
        assert_eq!(map.max(), IVec2::splat(8));
        assert_eq!(map.pool().remaining(), 0);
    }

    #[test]
    fn world_5_5_lands_on_tile_1_1_at_local_1_1() {
        let map = small_world(LookupMode::Grid);
        let p = IVec2::new(5, 5);
        let node = map.node(p).unwrap();
        assert_eq!(node.id(), TileId(3));
        assert_eq!(node.pos(), IVec2::new(4, 4));
        assert_eq!(node.world_to_local(p), IVec2::new(1, 1));
    }

    #[test]
    fn generate_fails_on_a_short_pool() {
        let config = WorldConfig::new(4, 2, 1).unwrap();
        let pool = Pool::<Cell>::reserve(config.total_cells() - 1);
        match Map::generate(config, pool) {
            Err(MapError::PoolExhausted {
                requested,
                remaining,
            }) => {
                assert_eq!(requested, 16);
                assert_eq!(remaining, 15);
            }
            Ok(_) => panic!("generate should exhaust the pool"),
        }
    }

    #[test]
    fn bounding_box_is_half_open() {
        let map = small_world(LookupMode::Grid);
        assert!(!map.out_of_bounds(IVec2::ZERO));
        assert!(!map.out_of_bounds(IVec2::new(7, 7)));
        assert!(map.out_of_bounds(IVec2::new(8, 0)));
        assert!(map.out_of_bounds(IVec2::new(0, 8)));
        assert!(map.out_of_bounds(IVec2::new(-1, 3)));
        assert_eq!(map.cell(IVec2::new(8, 8)), None);
    }

    #[test]
    fn empty_map_is_all_out_of_bounds() {
        let map: Map<Cell> = Map::new(WorldConfig::new(4, 2, 1).unwrap(), Pool::reserve(64));
        assert!(map.out_of_bounds(IVec2::ZERO));
        assert!(map.node(IVec2::ZERO).is_none());
    }

    #[test]
    fn cell_mut_writes_are_read_back() {
        let mut map = small_world(LookupMode::Grid);
        map.cell_mut(IVec2::new(5, 5)).unwrap().height = 3.0;
        map.cell_mut(IVec2::new(5, 5)).unwrap().discharge = 1.0;
        assert_eq!(map.cell(IVec2::new(5, 5)).unwrap().height, 3.0);
        assert_eq!(map.height(IVec2::new(5, 5)), 3.0);
        // Neighbouring cells are untouched.
        assert_eq!(map.height(IVec2::new(4, 5)), 0.0);
    }

    #[test]
    fn derived_accessors_default_out_of_bounds() {
        let map = small_world(LookupMode::Grid);
        assert_eq!(map.height(IVec2::new(-3, 0)), 0.0);
        assert_eq!(map.discharge(IVec2::new(99, 99)), 0.0);
        assert_eq!(map.normal(IVec2::new(99, 99)), Vec3::ZERO);
    }

    #[test]
    fn map_normal_is_unit_inside_the_world() {
        let mut map = small_world(LookupMode::Grid);
        map.cell_mut(IVec2::new(3, 3)).unwrap().height = 1.0;
        // (4, 4) sits on the seam between all four tiles; the map-level
        // reduction still sees every quadrant.
        let n = map.normal(IVec2::new(4, 4));
        assert!((n.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn sampler_is_keyed_by_tile_id() {
        let map = small_world(LookupMode::Grid);
        let sampler = map.sampler(TileId(3)).unwrap();
        assert_eq!(sampler.node().pos(), IVec2::new(4, 4));
        assert!(map.sampler(TileId(99)).is_none());
    }

    #[test]
    #[should_panic(expected = "duplicate TileId")]
    fn duplicate_tile_id_panics() {
        let config = WorldConfig::new(4, 1, 1).unwrap().with_lookup(LookupMode::Scan);
        let mut pool = Pool::<Cell>::reserve(32);
        let a = View::new(pool.acquire(16).unwrap(), IVec2::splat(4), 1);
        let b = View::new(pool.acquire(16).unwrap(), IVec2::splat(4), 1);
        let mut map = Map::new(config, pool);
        map.add(Node::new(TileId(0), IVec2::ZERO, IVec2::splat(4), a));
        map.add(Node::new(TileId(0), IVec2::new(4, 0), IVec2::splat(4), b));
    }

    #[test]
    #[should_panic(expected = "row-major grid order")]
    fn out_of_order_grid_insertion_is_caught_in_debug() {
        let config = WorldConfig::new(4, 2, 1).unwrap();
        let mut pool = Pool::<Cell>::reserve(64);
        let view = View::new(pool.acquire(16).unwrap(), IVec2::splat(4), 1);
        let mut map = Map::new(config, pool);
        // Grid slot (1, 1) first: its flat index is 3, not 0.
        map.add(Node::new(TileId(3), IVec2::new(4, 4), IVec2::splat(4), view));
    }

    proptest! {
        /// Every in-world coordinate routes to the unique node whose
        /// footprint contains it, in both lookup modes.
        #[test]
        fn grid_and_scan_agree(px in 0i32..8, py in 0i32..8) {
            let grid = small_world(LookupMode::Grid);
            let scan = small_world(LookupMode::Scan);
            let p = IVec2::new(px, py);
            let a = grid.node(p).expect("in-world coordinate must route");
            let b = scan.node(p).expect("in-world coordinate must route");
            prop_assert_eq!(a.id(), b.id());
            prop_assert!(a.footprint_contains(p));
        }
    }
}
