//! In-memory database client definitions.

pub mod shared;
pub mod tx;

use std::future::Future;

use super::State;

pub use self::{shared::Shared, tx::Tx};

/// Generic access to the [`State`] of the in-memory database.
pub trait Store {
    /// Runs the provided function over the [`State`].
    fn with<R>(&self, f: impl FnOnce(&State) -> R) -> impl Future<Output = R>;

    /// Runs the provided function over the [`State`], allowing to mutate it.
    fn with_mut<R>(
        &self,
        f: impl FnOnce(&mut State) -> R,
    ) -> impl Future<Output = R>;
}
