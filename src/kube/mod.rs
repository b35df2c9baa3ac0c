//! Kubernetes client module
//!
//! Handles connection to the Kubernetes API server and provides the
//! cluster-backed stores the switcher reads from.

mod stores;

pub use stores::{KubeCrdStore, KubeNamespaceStore, custom_resource_type};

use anyhow::{Context, Result};
use kube::config::Kubeconfig;
use kube::{Client, Config};

/// Initialize and return a Kubernetes client
///
/// Uses the default kubeconfig loading strategy:
/// 1. In-cluster config (if running in a pod)
/// 2. KUBECONFIG environment variable
/// 3. ~/.kube/config
pub async fn create_client() -> Result<Client> {
    let config = Config::infer()
        .await
        .context("Failed to infer Kubernetes configuration")?;
    tracing::debug!("Connecting to {}", config.cluster_url);

    let client = Client::try_from(config).context("Failed to create Kubernetes client")?;
    Ok(client)
}

/// Get the current Kubernetes context name
pub fn get_context() -> String {
    match Kubeconfig::read() {
        Ok(kubeconfig) => kubeconfig
            .current_context
            .unwrap_or_else(|| "default".to_string()),
        Err(e) => {
            // In-cluster or no kubeconfig at all
            tracing::debug!("Could not read kubeconfig: {}", e);
            "default".to_string()
        }
    }
}
