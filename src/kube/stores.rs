//! Cluster-backed stores
//!
//! Each store keeps a [`MemoryStore`] snapshot and refreshes it with a full
//! list call on `load_all`. A failed list keeps the previous snapshot.

use crate::store::{CustomResourceType, MemoryStore, Namespace, ObjectStore, StoreResult};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Namespace as NamespaceObject;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::Client;
use kube::api::{Api, ListParams};
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// List every object of `api` into `snapshot`, mapping with `convert`
async fn list_into<K, T>(
    api: Api<K>,
    snapshot: &MemoryStore<T>,
    convert: impl Fn(&K) -> Option<T>,
) -> StoreResult<()>
where
    K: Clone + DeserializeOwned + Debug,
    T: Clone,
{
    snapshot.begin_load();
    match api.list(&ListParams::default()).await {
        Ok(list) => {
            let items: Vec<T> = list.items.iter().filter_map(convert).collect();
            tracing::debug!("Listed {} objects", items.len());
            snapshot.finish_load(items);
            Ok(())
        }
        Err(e) => {
            snapshot.fail_load();
            Err(e.into())
        }
    }
}

/// Namespaces visible to the current user
pub struct KubeNamespaceStore {
    client: Client,
    snapshot: MemoryStore<Namespace>,
}

impl KubeNamespaceStore {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            snapshot: MemoryStore::new(),
        }
    }
}

#[async_trait]
impl ObjectStore<Namespace> for KubeNamespaceStore {
    fn items(&self) -> Vec<Namespace> {
        self.snapshot.snapshot()
    }

    fn is_loading(&self) -> bool {
        self.snapshot.loading()
    }

    fn is_loaded(&self) -> bool {
        self.snapshot.loaded()
    }

    async fn load_all(&self) -> StoreResult<()> {
        let api: Api<NamespaceObject> = Api::all(self.client.clone());
        list_into(api, &self.snapshot, |ns| {
            ns.metadata.name.as_deref().map(Namespace::new)
        })
        .await
    }
}

/// Custom resource types installed in the cluster
pub struct KubeCrdStore {
    client: Client,
    snapshot: MemoryStore<CustomResourceType>,
}

impl KubeCrdStore {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            snapshot: MemoryStore::new(),
        }
    }
}

#[async_trait]
impl ObjectStore<CustomResourceType> for KubeCrdStore {
    fn items(&self) -> Vec<CustomResourceType> {
        self.snapshot.snapshot()
    }

    fn is_loading(&self) -> bool {
        self.snapshot.loading()
    }

    fn is_loaded(&self) -> bool {
        self.snapshot.loaded()
    }

    async fn load_all(&self) -> StoreResult<()> {
        let api: Api<CustomResourceDefinition> = Api::all(self.client.clone());
        list_into(api, &self.snapshot, |crd| Some(custom_resource_type(crd))).await
    }
}

/// Map a CRD to the type the switcher lists.
///
/// The version is the storage version, falling back to the first served
/// version and then to the first listed one.
pub fn custom_resource_type(crd: &CustomResourceDefinition) -> CustomResourceType {
    let spec = &crd.spec;
    let version = spec
        .versions
        .iter()
        .find(|version| version.storage)
        .or_else(|| spec.versions.iter().find(|version| version.served))
        .or_else(|| spec.versions.first())
        .map(|version| version.name.clone())
        .unwrap_or_default();

    CustomResourceType::new(
        spec.names.kind.clone(),
        spec.group.clone(),
        version,
        spec.names.plural.clone(),
    )
}
