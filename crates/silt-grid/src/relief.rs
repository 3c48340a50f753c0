//! Derived read-only reductions over cell data.
//!
//! Nothing here is stored state: normalized discharge and the
//! finite-difference surface normal are pure functions of neighbouring
//! cells, evaluated through the [`Relief`] trait so the same code serves
//! both a single tile (via [`Sampler`]) and a whole map.

use glam::{IVec2, Vec3};
use silt_core::{Terrain, WorldConfig};
use silt_pool::Pool;

use crate::node::Node;

/// Gain applied to raw discharge before the error function.
pub const DISCHARGE_GAIN: f32 = 0.4;

/// Squash a raw discharge value into `(-1, 1)`.
///
/// `erf(0.4 * raw)`: a display normalization monotonically related to
/// flux magnitude, not a physical quantity.
pub fn normalized_discharge(raw: f32) -> f32 {
    libm::erff(DISCHARGE_GAIN * raw)
}

/// Step and vertical exaggeration for the surface-normal reduction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReliefParams {
    /// Sampling step in world units; the level-of-detail stride.
    pub step: i32,
    /// Vertical exaggeration applied to height differences.
    pub exaggeration: f32,
}

impl ReliefParams {
    /// Derive reduction parameters from a world configuration.
    pub fn from_config(config: &WorldConfig) -> Self {
        Self {
            step: config.lod as i32,
            exaggeration: config.relief_scale,
        }
    }
}

/// A queryable height field with an out-of-bounds policy.
///
/// Implemented by [`Sampler`] (one tile) and [`Map`](crate::Map) (the
/// whole world). Out-of-bounds heights and discharges return 0.0 so that
/// edge queries stay routine rather than exceptional.
pub trait Relief {
    /// Whether a world coordinate falls outside the field.
    fn out_of_bounds(&self, p: IVec2) -> bool;

    /// Terrain elevation at a world coordinate; 0.0 out of bounds.
    fn height(&self, p: IVec2) -> f32;

    /// Normalized discharge at a world coordinate; 0.0 out of bounds.
    fn discharge(&self, p: IVec2) -> f32;
}

/// Approximate the surface normal at `p` by four-quadrant finite
/// differences.
///
/// For each diagonal direction whose offset coordinate is in bounds, the
/// cross product of the quadrant's two edge vectors is accumulated: each
/// edge vector has unit horizontal length and a height difference (scaled
/// by `params.exaggeration`) as its vertical component. Quadrants whose
/// diagonal lands out of bounds contribute nothing, so cells near an edge
/// simply average fewer planes. The zero vector is returned only when all
/// four quadrants are out of bounds.
pub fn surface_normal<R: Relief + ?Sized>(relief: &R, p: IVec2, params: &ReliefParams) -> Vec3 {
    let step = params.step;
    let s = Vec3::new(1.0, params.exaggeration, 1.0);
    let h = |q: IVec2| relief.height(q);
    let mut n = Vec3::ZERO;

    if !relief.out_of_bounds(p + step * IVec2::new(1, 1)) {
        n += (s * Vec3::new(0.0, h(p + step * IVec2::new(0, 1)) - h(p), 1.0))
            .cross(s * Vec3::new(1.0, h(p + step * IVec2::new(1, 0)) - h(p), 0.0));
    }

    if !relief.out_of_bounds(p + step * IVec2::new(-1, -1)) {
        n += (s * Vec3::new(0.0, h(p - step * IVec2::new(0, 1)) - h(p), -1.0))
            .cross(s * Vec3::new(-1.0, h(p - step * IVec2::new(1, 0)) - h(p), 0.0));
    }

    // The two alternative planes: (+x, -y) and (-x, +y).
    if !relief.out_of_bounds(p + step * IVec2::new(1, -1)) {
        n += (s * Vec3::new(1.0, h(p + step * IVec2::new(1, 0)) - h(p), 0.0))
            .cross(s * Vec3::new(0.0, h(p - step * IVec2::new(0, 1)) - h(p), -1.0));
    }

    if !relief.out_of_bounds(p + step * IVec2::new(-1, 1)) {
        n += (s * Vec3::new(-1.0, h(p - step * IVec2::new(1, 0)) - h(p), 0.0))
            .cross(s * Vec3::new(0.0, h(p + step * IVec2::new(0, 1)) - h(p), 1.0));
    }

    n.normalize_or_zero()
}

/// One tile bundled with its pool and reduction parameters.
///
/// The node-level counterpart of querying a map directly: the renderer
/// walks a single tile's cells through a sampler when rebuilding that
/// tile's geometry.
#[derive(Clone, Copy)]
pub struct Sampler<'a, T> {
    node: &'a Node,
    pool: &'a Pool<T>,
    params: ReliefParams,
}

impl<'a, T> Sampler<'a, T> {
    /// Bundle a node with the pool backing it.
    pub fn new(node: &'a Node, pool: &'a Pool<T>, params: ReliefParams) -> Self {
        Self { node, pool, params }
    }

    /// The sampled node.
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// The reduction parameters in effect.
    pub fn params(&self) -> ReliefParams {
        self.params
    }

    /// The cell at a world coordinate, if it lies on this tile.
    pub fn cell(&self, p: IVec2) -> Option<&'a T> {
        self.node.get(self.pool, p)
    }
}

impl<T: Terrain> Sampler<'_, T> {
    /// Surface normal at a world coordinate, bounded by this tile.
    pub fn normal(&self, p: IVec2) -> Vec3 {
        surface_normal(self, p, &self.params)
    }
}

impl<T: Terrain> Relief for Sampler<'_, T> {
    fn out_of_bounds(&self, p: IVec2) -> bool {
        self.node.out_of_bounds(p)
    }

    fn height(&self, p: IVec2) -> f32 {
        self.cell(p).map(Terrain::height).unwrap_or(0.0)
    }

    fn discharge(&self, p: IVec2) -> f32 {
        normalized_discharge(self.cell(p).map(Terrain::discharge).unwrap_or(0.0))
    }
}
