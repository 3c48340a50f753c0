//! The cell pool: one owned buffer plus a bump cursor.

use crate::span::Span;

/// Fixed-capacity bump arena over a contiguous buffer of cell records.
///
/// The buffer is allocated once at construction, default-initialised, and
/// never resized. [`Pool::acquire`] advances a cursor through the single
/// free region; there is no way to return a span, so the free region only
/// shrinks. Dropping the pool releases the whole buffer at once.
pub struct Pool<T> {
    /// Backing storage. Allocated to full capacity at construction.
    data: Vec<T>,
    /// Bump pointer: next free position, in cells.
    cursor: usize,
}

impl<T: Clone + Default> Pool<T> {
    /// Reserve a pool holding `capacity` default-initialised cells.
    ///
    /// This is the single allocation the pool ever performs.
    pub fn reserve(capacity: u32) -> Self {
        Self {
            data: vec![T::default(); capacity as usize],
            cursor: 0,
        }
    }
}

impl<T> Pool<T> {
    /// Carve `len` cells off the front of the free region.
    ///
    /// Returns `None`, without touching the free region, if fewer than
    /// `len` cells remain. A zero-length request always succeeds and
    /// yields an empty span at the current cursor.
    pub fn acquire(&mut self, len: u32) -> Option<Span> {
        let new_cursor = self.cursor.checked_add(len as usize)?;
        if new_cursor > self.data.len() {
            return None;
        }
        let span = Span::new(self.cursor as u32, len);
        self.cursor = new_cursor;
        Some(span)
    }

    /// Resolve a span to its cells.
    ///
    /// # Panics
    ///
    /// Panics if the span reaches past the end of this pool's buffer,
    /// which cannot happen for spans minted by this pool's
    /// [`Pool::acquire`].
    pub fn slice(&self, span: Span) -> &[T] {
        let start = span.offset() as usize;
        let end = start + span.len() as usize;
        &self.data[start..end]
    }

    /// Resolve a span to its cells, mutably.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`Pool::slice`].
    pub fn slice_mut(&mut self, span: Span) -> &mut [T] {
        let start = span.offset() as usize;
        let end = start + span.len() as usize;
        &mut self.data[start..end]
    }

    /// Total capacity in cells.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Cells handed out so far.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Cells remaining in the free region.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// Memory footprint of the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<T>()
    }
}
