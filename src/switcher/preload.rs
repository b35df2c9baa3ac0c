//! Best-effort store preloading
//!
//! Opening the switcher asks both stores to reload. The work runs as a
//! detached task; failures are logged and dropped so rendering always
//! continues with whatever the stores already hold.

use super::SwitcherContext;
use crate::store::{StoreError, StoreResult};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Spawn a reload of the namespace and custom resource stores.
///
/// Returns `None` when no tokio runtime is available.
pub fn preload_stores(context: &SwitcherContext) -> Option<JoinHandle<()>> {
    let Ok(runtime) = tokio::runtime::Handle::try_current() else {
        tracing::debug!("No async runtime available, skipping switcher store preload");
        return None;
    };

    let namespaces = Arc::clone(&context.namespaces);
    let custom_resources = Arc::clone(&context.custom_resources);

    Some(runtime.spawn(async move {
        let (namespace_result, crd_result) =
            futures::future::join(namespaces.load_all(), custom_resources.load_all()).await;

        log_preload_result("namespaces", namespace_result);
        log_preload_result("custom resource definitions", crd_result);
    }))
}

fn log_preload_result(store: &str, result: StoreResult<()>) {
    match result {
        Ok(()) => tracing::debug!("Preloaded {}", store),
        Err(StoreError::Unsupported) => {
            tracing::trace!("Store for {} has no loader, skipping preload", store)
        }
        Err(e) => tracing::warn!("Resource switcher failed to preload {}: {}", store, e),
    }
}
