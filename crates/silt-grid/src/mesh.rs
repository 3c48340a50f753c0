//! Render-facing tile geometry.
//!
//! The display layer owns its vertex buffers and colors; this module's
//! only obligation is to produce, deterministically and in bounded time,
//! the triangle indices for a tile's local grid and the per-vertex
//! samples (position, normal, wetness) the renderer fills them with.

use glam::{IVec2, Vec3};
use silt_core::Terrain;

use crate::relief::{Relief, Sampler};

/// Row-major flat offset, matching the view layout.
fn flatten(p: IVec2, res: IVec2) -> u32 {
    (p.y * res.x + p.x) as u32
}

/// Per-vertex sample handed to the renderer.
///
/// Color is deliberately absent: the display layer derives it from
/// `wetness`, `normal`, and position, and owns that policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileVertex {
    /// World-space position: `(x, exaggeration * height, z)`.
    pub position: Vec3,
    /// Surface normal from the four-quadrant reduction.
    pub normal: Vec3,
    /// Normalized discharge in `(-1, 1)`.
    pub wetness: f32,
}

/// Triangle indices for a tile's local grid at the given stride.
///
/// Two counter-ordered triangles per quad, indexing vertices laid out in
/// the row-major order produced by [`tile_vertices`]. A grid narrower
/// than two vertices on either axis has no quads and yields no indices.
pub fn tile_indices(res: IVec2, stride: i32) -> Vec<u32> {
    let vres = res / stride;
    if vres.x < 2 || vres.y < 2 {
        return Vec::new();
    }
    let quads = ((vres.x - 1) * (vres.y - 1)) as usize;
    let mut indices = Vec::with_capacity(quads * 6);
    for j in 0..vres.y - 1 {
        for i in 0..vres.x - 1 {
            indices.push(flatten(IVec2::new(i, j), vres));
            indices.push(flatten(IVec2::new(i, j + 1), vres));
            indices.push(flatten(IVec2::new(i + 1, j), vres));

            indices.push(flatten(IVec2::new(i + 1, j), vres));
            indices.push(flatten(IVec2::new(i, j + 1), vres));
            indices.push(flatten(IVec2::new(i + 1, j + 1), vres));
        }
    }
    indices
}

/// Sample every vertex of a tile in row-major order.
///
/// The vertex at local grid coordinate `(i, j)` lands at flat index
/// `j * vres.x + i`, so the result pairs directly with [`tile_indices`]
/// called at the sampler's step.
pub fn tile_vertices<T: Terrain>(sampler: &Sampler<'_, T>) -> Vec<TileVertex> {
    let node = sampler.node();
    let params = sampler.params();
    let vres = node.res() / params.step;
    let mut vertices = Vec::with_capacity((vres.x * vres.y) as usize);
    for j in 0..vres.y {
        for i in 0..vres.x {
            let p = node.pos() + params.step * IVec2::new(i, j);
            vertices.push(TileVertex {
                position: Vec3::new(
                    p.x as f32,
                    params.exaggeration * sampler.height(p),
                    p.y as f32,
                ),
                normal: sampler.normal(p),
                wetness: sampler.discharge(p),
            });
        }
    }
    vertices
}
