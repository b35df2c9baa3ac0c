//! Object store abstraction
//!
//! The switcher never owns resource data. It reads snapshots from stores that
//! load lists of typed objects asynchronously (namespaces, custom resource
//! types) and may trigger a best-effort reload when the overlay opens.

mod memory;
mod objects;

pub use memory::MemoryStore;
pub use objects::{CustomResourceType, Namespace};

use async_trait::async_trait;

/// Store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store does not support loading")]
    Unsupported,

    #[error("Kubernetes API error: {0}")]
    Api(#[from] kube::Error),

    #[error("Failed to load store: {0}")]
    Load(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only view over an asynchronously loaded list of objects
#[async_trait]
pub trait ObjectStore<T>: Send + Sync {
    /// Current items, in store order. Empty until the first load completes.
    fn items(&self) -> Vec<T>;

    /// Whether a load is in flight
    fn is_loading(&self) -> bool;

    /// Whether at least one load has completed successfully
    fn is_loaded(&self) -> bool;

    /// Load all objects from the backing source.
    ///
    /// Stores without a loader keep the default, which reports
    /// [`StoreError::Unsupported`].
    async fn load_all(&self) -> StoreResult<()> {
        Err(StoreError::Unsupported)
    }
}
