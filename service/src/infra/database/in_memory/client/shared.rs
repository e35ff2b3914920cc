//! [`Shared`] client definitions.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::{State, Store};

/// Client owning the shared [`State`] of the in-memory database.
///
/// Cloning this client is cheap and yields a handle to the same [`State`].
#[derive(Clone, Debug, Default)]
pub struct Shared {
    /// [`State`] shared between all the clients.
    pub(crate) state: Arc<Mutex<State>>,
}

impl Store for Shared {
    async fn with<R>(&self, f: impl FnOnce(&State) -> R) -> R {
        f(&*self.state.lock().await)
    }

    async fn with_mut<R>(&self, f: impl FnOnce(&mut State) -> R) -> R {
        f(&mut *self.state.lock().await)
    }
}
