//! Thread-safe handle around one scene store.
//!
//! Every call runs as a single critical section, so read-modify-write
//! sequences inside one closure never interleave with other callers.

use crate::model::item::PlacedItem;
use crate::scene::store::SceneHistoryStore;
use std::sync::{Arc, Mutex, PoisonError};

/// Cloneable shared scene handle.
#[derive(Debug, Clone, Default)]
pub struct SharedScene {
    inner: Arc<Mutex<SceneHistoryStore>>,
}

impl SharedScene {
    pub fn new(store: SceneHistoryStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` with exclusive access to the store.
    ///
    /// A poisoned lock is recovered. Store operations commit whole snapshots,
    /// so the store is consistent after any panic.
    pub fn with<R>(&self, f: impl FnOnce(&mut SceneHistoryStore) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    /// Owned copy of the live items.
    pub fn items(&self) -> Vec<PlacedItem> {
        self.with(|store| store.items().to_vec())
    }
}
