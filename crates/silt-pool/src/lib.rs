//! Single-allocation bump arena for interleaved cell data.
//!
//! A [`Pool`] owns one contiguous, fixed-length buffer of cell records and
//! carves non-owning [`Span`] handles out of it on demand. There is no
//! release path: spans are handed out until the free region is exhausted,
//! and the whole buffer is dropped at once with the pool. This matches the
//! static tile layout of the map layer, where every span is acquired during
//! startup and lives for the lifetime of the world.
//!
//! Spans carry offsets rather than pointers; resolving one back to storage
//! requires a reference to the pool, so no access can outlive the buffer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod pool;
pub mod span;

pub use pool::Pool;
pub use span::Span;
