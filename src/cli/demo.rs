//! Sample data for running without a cluster

use kswitch::store::{CustomResourceType, MemoryStore, Namespace};

const DEMO_NAMESPACES: &[&str] = &["default", "flux-system", "kube-system", "monitoring"];

const DEMO_CRDS: &[(&str, &str, &str, &str)] = &[
    (
        "GitRepository",
        "source.toolkit.fluxcd.io",
        "v1",
        "gitrepositories",
    ),
    (
        "HelmRelease",
        "helm.toolkit.fluxcd.io",
        "v2",
        "helmreleases",
    ),
    (
        "Kustomization",
        "kustomize.toolkit.fluxcd.io",
        "v1",
        "kustomizations",
    ),
    (
        "OCIRepository",
        "source.toolkit.fluxcd.io",
        "v1beta2",
        "ocirepositories",
    ),
    (
        "ImageUpdateAutomation",
        "image.toolkit.fluxcd.io",
        "v1beta2",
        "imageupdateautomations",
    ),
];

/// Pre-populated namespace and CRD stores
pub fn demo_stores() -> (MemoryStore<Namespace>, MemoryStore<CustomResourceType>) {
    let namespaces = DEMO_NAMESPACES
        .iter()
        .map(|name| Namespace::new(*name))
        .collect();
    let crds = DEMO_CRDS
        .iter()
        .map(|(kind, group, version, plural)| {
            CustomResourceType::new(*kind, *group, *version, *plural)
        })
        .collect();

    (MemoryStore::with_items(namespaces), MemoryStore::with_items(crds))
}
