//! Bounds-checked 2D windows over pool spans.

use glam::IVec2;
use silt_pool::{Pool, Span};

/// A non-owning 2D window over a span of cells.
///
/// A view addresses `res.x * res.y` cells of its span in row-major order
/// and records the level-of-detail `scale` its node applies when
/// translating world coordinates. The view itself works in local,
/// already-scale-divided coordinates; anything outside
/// `[0, res.x) x [0, res.y)` is out of bounds.
///
/// Views hold no reference to storage. Every access resolves through the
/// pool that minted the span, so a view can never outlive the cells it
/// windows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct View {
    span: Span,
    res: IVec2,
    scale: i32,
}

impl View {
    /// Create a view addressing `res.x * res.y` cells of `span`.
    ///
    /// # Panics
    ///
    /// Panics if `res` has a negative component, if `scale < 1`, or if
    /// the view would address more cells than the span holds.
    pub fn new(span: Span, res: IVec2, scale: i32) -> Self {
        assert!(
            res.x >= 0 && res.y >= 0,
            "view resolution {res} must be non-negative"
        );
        assert!(scale >= 1, "view scale {scale} must be at least 1");
        assert!(
            (res.x as u32) * (res.y as u32) <= span.len(),
            "view {}x{} exceeds span of {} cells",
            res.x,
            res.y,
            span.len()
        );
        Self { span, res, scale }
    }

    /// The unbound view: no backing span, every access misses.
    pub fn unbound() -> Self {
        Self {
            span: Span::EMPTY,
            res: IVec2::ZERO,
            scale: 1,
        }
    }

    /// Number of cells this view addresses.
    pub fn len(&self) -> usize {
        (self.res.x * self.res.y) as usize
    }

    /// Whether the view addresses no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The underlying span handle.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Local resolution in cells.
    pub fn res(&self) -> IVec2 {
        self.res
    }

    /// Level-of-detail stride recorded for this view's node.
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Whether a local coordinate falls outside the window.
    pub fn out_of_bounds(&self, p: IVec2) -> bool {
        p.x < 0 || p.x >= self.res.x || p.y < 0 || p.y >= self.res.y
    }

    /// Row-major flat offset of a local coordinate within the span.
    ///
    /// `None` when the coordinate is out of bounds or the view is unbound.
    pub fn index(&self, p: IVec2) -> Option<usize> {
        if self.span.is_empty() || self.out_of_bounds(p) {
            return None;
        }
        Some((p.y * self.res.x + p.x) as usize)
    }

    /// Resolve a local coordinate to its cell.
    pub fn get<'p, T>(&self, pool: &'p Pool<T>, p: IVec2) -> Option<&'p T> {
        let i = self.index(p)?;
        Some(&pool.slice(self.span)[i])
    }

    /// Resolve a local coordinate to its cell, mutably.
    pub fn get_mut<'p, T>(&self, pool: &'p mut Pool<T>, p: IVec2) -> Option<&'p mut T> {
        let i = self.index(p)?;
        Some(&mut pool.slice_mut(self.span)[i])
    }
}

impl Default for View {
    fn default() -> Self {
        Self::unbound()
    }
}
