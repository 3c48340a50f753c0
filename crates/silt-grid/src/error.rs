//! Map construction errors.

use std::error::Error;
use std::fmt;

/// Errors from building a [`Map`](crate::Map).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapError {
    /// The pool could not back another tile. The configured world needs
    /// more cells than the pool was reserved with; the hosting
    /// application treats this as fatal at startup.
    PoolExhausted {
        /// Cells the next tile needed.
        requested: usize,
        /// Cells left in the pool's free region.
        remaining: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoolExhausted {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "cell pool exhausted: tile needs {requested} cells, {remaining} remain"
                )
            }
        }
    }
}

impl Error for MapError {}
