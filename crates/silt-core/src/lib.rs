//! Core types for the Silt terrain store.
//!
//! Defines the interleaved per-cell record ([`Cell`]), the [`Terrain`]
//! trait through which the tiling layer reads derived scalars, the
//! startup [`WorldConfig`], and the [`TileId`] identifier.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod config;
pub mod error;
pub mod id;

pub use cell::{Cell, Terrain};
pub use config::{LookupMode, WorldConfig};
pub use error::ConfigError;
pub use id::TileId;
