//! [`Tx`] client definitions.

use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use super::{Shared, State, Store};

/// Transactional in-memory database client.
///
/// Holds the shared [`State`] exclusively until committed or dropped, so at
/// most one [`Tx`] client is in effect at any moment, and the others block
/// until it completes.
#[derive(Clone, Debug)]
pub struct Tx {
    /// Inner representation of this client.
    inner: Arc<Mutex<Inner>>,
}

/// Inner representation of the [`Tx`] client.
#[derive(Debug)]
struct Inner {
    /// Exclusive guard over the shared [`State`], released once the
    /// transaction completes.
    guard: Option<OwnedMutexGuard<State>>,

    /// Draft [`State`] the transaction is performed upon.
    ///
    /// Replaces the shared [`State`] on commit, and is thrown away if the
    /// transaction is dropped uncommitted.
    draft: State,
}

impl Tx {
    /// Creates a new [`Tx`] client atop the provided [`Shared`] client.
    ///
    /// Resolves once exclusive access to the shared [`State`] is acquired.
    #[must_use]
    pub async fn from_shared(client: &Shared) -> Self {
        let guard = Arc::clone(&client.state).lock_owned().await;
        let draft = guard.clone();
        Self {
            inner: Arc::new(Mutex::new(Inner {
                guard: Some(guard),
                draft,
            })),
        }
    }

    /// Commits this [`Tx`] client, publishing its draft [`State`] as the
    /// shared one.
    ///
    /// Committing an already committed [`Tx`] client has no effect.
    pub async fn commit(&self) {
        let mut inner = self.inner.lock().await;
        if let Some(mut guard) = inner.guard.take() {
            *guard = inner.draft.clone();
        }
    }
}

impl Store for Tx {
    async fn with<R>(&self, f: impl FnOnce(&State) -> R) -> R {
        f(&self.inner.lock().await.draft)
    }

    async fn with_mut<R>(&self, f: impl FnOnce(&mut State) -> R) -> R {
        f(&mut self.inner.lock().await.draft)
    }
}
