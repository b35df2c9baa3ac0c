//! In-memory store
//!
//! Holds a snapshot plus loading flags behind a lock. Used directly for demo
//! data and tests, and as the backing snapshot of the Kubernetes stores.

use super::ObjectStore;
use std::sync::{Arc, RwLock};

#[derive(Debug)]
struct Snapshot<T> {
    items: Vec<T>,
    loading: bool,
    loaded: bool,
}

/// Thread-safe snapshot store
#[derive(Debug)]
pub struct MemoryStore<T> {
    inner: Arc<RwLock<Snapshot<T>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> MemoryStore<T> {
    /// Create an empty store that has never loaded
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Snapshot {
                items: Vec::new(),
                loading: false,
                loaded: false,
            })),
        }
    }

    /// Create a store that is already loaded with `items`
    pub fn with_items(items: Vec<T>) -> Self {
        let store = Self::new();
        store.finish_load(items);
        store
    }

    /// Mark a load as in flight
    pub fn begin_load(&self) {
        let mut snapshot = self.inner.write().unwrap();
        snapshot.loading = true;
    }

    /// Replace the items and mark the store loaded
    pub fn finish_load(&self, items: Vec<T>) {
        let mut snapshot = self.inner.write().unwrap();
        snapshot.items = items;
        snapshot.loading = false;
        snapshot.loaded = true;
    }

    /// Clear the in-flight flag, keeping whatever items were cached
    pub fn fail_load(&self) {
        let mut snapshot = self.inner.write().unwrap();
        snapshot.loading = false;
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.inner.read().unwrap().items.clone()
    }

    pub fn loading(&self) -> bool {
        self.inner.read().unwrap().loading
    }

    pub fn loaded(&self) -> bool {
        self.inner.read().unwrap().loaded
    }
}

impl<T: Clone> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync> ObjectStore<T> for MemoryStore<T> {
    fn items(&self) -> Vec<T> {
        self.snapshot()
    }

    fn is_loading(&self) -> bool {
        self.loading()
    }

    fn is_loaded(&self) -> bool {
        self.loaded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Namespace, StoreError};

    #[test]
    fn test_new_store_is_empty_and_unloaded() {
        let store: MemoryStore<Namespace> = MemoryStore::new();
        assert!(store.items().is_empty());
        assert!(!store.is_loading());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_load_lifecycle() {
        let store = MemoryStore::new();
        store.begin_load();
        assert!(store.is_loading());
        assert!(!store.is_loaded());

        store.finish_load(vec![Namespace::new("default")]);
        assert!(!store.is_loading());
        assert!(store.is_loaded());
        assert_eq!(store.items(), vec![Namespace::new("default")]);
    }

    #[test]
    fn test_failed_load_keeps_cached_items() {
        let store = MemoryStore::with_items(vec![Namespace::new("default")]);
        store.begin_load();
        store.fail_load();
        assert!(!store.is_loading());
        assert!(store.is_loaded());
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();
        handle.finish_load(vec![Namespace::new("kube-system")]);
        assert_eq!(store.items(), vec![Namespace::new("kube-system")]);
    }

    #[tokio::test]
    async fn test_memory_store_has_no_loader() {
        let store: MemoryStore<Namespace> = MemoryStore::new();
        let result = store.load_all().await;
        assert!(matches!(result, Err(StoreError::Unsupported)));
    }
}
