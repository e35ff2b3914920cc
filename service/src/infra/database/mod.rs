//! [`Database`]-related implementations.

#[cfg(feature = "inmem")]
pub mod in_memory;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "inmem")]
pub use self::in_memory::InMemory;

/// Database operation.
pub use common::Handler as Database;

/// [`Database`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "inmem")]
    /// [`InMemory`] error.
    InMemory(in_memory::Error),
}

impl Error {
    /// Checks if the error is a unique index violation of the specified
    /// `index`.
    #[must_use]
    pub fn is_unique_violation(&self, index: Option<&str>) -> bool {
        match self {
            #[cfg(feature = "inmem")]
            Self::InMemory(e) => e.is_unique_violation(index),
            #[cfg(not(feature = "inmem"))]
            _ => {
                _ = index;
                false
            }
        }
    }
}
