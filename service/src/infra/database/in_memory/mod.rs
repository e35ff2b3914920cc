//! In-memory [`Database`] implementation.

pub mod client;
mod impls;
pub mod state;

use derive_more::{Deref, Display, Error as StdError};

#[cfg(doc)]
use crate::infra::Database;

pub use self::{
    client::{Shared, Store, Tx},
    state::State,
};

/// In-memory [`Database`] client.
///
/// All the data lives in the process memory and is gone once the last client
/// is dropped.
#[derive(Clone, Debug, Default, Deref)]
pub struct InMemory<T = Shared>(T);

impl InMemory {
    /// Creates a new [`InMemory`] client with an empty [`State`].
    #[must_use]
    pub fn new() -> Self {
        Self(Shared::default())
    }
}

/// In-memory database [`Error`].
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Violation of a unique index.
    #[display("unique index `{_0}` violated")]
    UniqueViolation(#[error(not(source))] &'static str),
}

impl Error {
    /// Checks if the error is a unique index violation of the specified
    /// `index`.
    #[must_use]
    pub fn is_unique_violation(&self, index: Option<&str>) -> bool {
        match self {
            Self::UniqueViolation(violated) => {
                index.map_or(true, |i| i == *violated)
            }
        }
    }
}
