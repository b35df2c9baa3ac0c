//! Switcher candidates
//!
//! A candidate is a label plus the action to run when it is chosen. Actions
//! are an explicit tagged enum: plain callbacks run directly, custom resource
//! references are turned into a navigation path only at commit time.

use super::catalog::STATIC_CATALOG;
use super::label::custom_resource_label;
use crate::host::{NamespaceSelection, Navigator};
use crate::store::{CustomResourceType, Namespace};
use std::sync::Arc;

/// Label of the synthetic namespace entry that selects every namespace
pub const ALL_NAMESPACES_LABEL: &str = "Namespaces: All namespaces";

/// Path prefix for custom resource views
pub const CRD_PATH_PREFIX: &str = "/crd";

/// Zero-argument side effect run on commit
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// What happens when a candidate is chosen
#[derive(Clone)]
pub enum CandidateAction {
    Callback(Callback),
    ResourceReference(CustomResourceType),
}

impl std::fmt::Debug for CandidateAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateAction::Callback(_) => f.write_str("Callback"),
            CandidateAction::ResourceReference(resource) => f
                .debug_tuple("ResourceReference")
                .field(resource)
                .finish(),
        }
    }
}

/// Source a candidate was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateGroup {
    Namespace,
    Catalog,
    CustomResource,
}

#[derive(Debug, Clone)]
pub struct Candidate {
    label: String,
    group: CandidateGroup,
    action: CandidateAction,
}

impl Candidate {
    pub fn callback(
        label: impl Into<String>,
        group: CandidateGroup,
        callback: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            group,
            action: CandidateAction::Callback(Arc::new(callback)),
        }
    }

    pub fn resource_reference(resource: CustomResourceType) -> Self {
        Self {
            label: custom_resource_label(&resource),
            group: CandidateGroup::CustomResource,
            action: CandidateAction::ResourceReference(resource),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn group(&self) -> CandidateGroup {
        self.group
    }

    pub fn action(&self) -> &CandidateAction {
        &self.action
    }
}

/// Navigation path for a custom resource view: `/crd/{group}/{plural}`
pub fn custom_resource_path(resource: &CustomResourceType) -> String {
    format!(
        "{}/{}/{}",
        CRD_PATH_PREFIX,
        resource.group(),
        resource.plural()
    )
}

/// "All namespaces" first, then one entry per namespace in store order
pub fn namespace_candidates(
    namespaces: &[Namespace],
    selection: &Arc<dyn NamespaceSelection>,
) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(namespaces.len() + 1);

    let select_all = Arc::clone(selection);
    candidates.push(Candidate::callback(
        ALL_NAMESPACES_LABEL,
        CandidateGroup::Namespace,
        move || select_all.select_all(),
    ));

    for namespace in namespaces {
        let selection = Arc::clone(selection);
        let name = namespace.name().to_string();
        candidates.push(Candidate::callback(
            format!("Namespace: {}", name),
            CandidateGroup::Namespace,
            move || selection.select_single(&name),
        ));
    }

    candidates
}

/// Built-in views in catalog order
pub fn catalog_candidates(navigator: &Arc<dyn Navigator>) -> Vec<Candidate> {
    STATIC_CATALOG
        .iter()
        .map(|&(label, path)| {
            let navigator = Arc::clone(navigator);
            Candidate::callback(label, CandidateGroup::Catalog, move || {
                navigator.navigate(path)
            })
        })
        .collect()
}

/// One entry per custom resource type in store order
pub fn custom_resource_candidates(resources: &[CustomResourceType]) -> Vec<Candidate> {
    resources
        .iter()
        .cloned()
        .map(Candidate::resource_reference)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MockNamespaceSelection, MockNavigator};

    fn run(candidate: &Candidate) {
        match candidate.action() {
            CandidateAction::Callback(callback) => callback(),
            CandidateAction::ResourceReference(_) => panic!("expected a callback"),
        }
    }

    #[test]
    fn test_namespace_candidates_order_and_labels() {
        let selection: Arc<dyn NamespaceSelection> = Arc::new(MockNamespaceSelection::new());
        let candidates =
            namespace_candidates(&[Namespace::new("a"), Namespace::new("b")], &selection);

        let labels: Vec<&str> = candidates.iter().map(Candidate::label).collect();
        assert_eq!(
            labels,
            vec![ALL_NAMESPACES_LABEL, "Namespace: a", "Namespace: b"]
        );
        assert!(
            candidates
                .iter()
                .all(|c| c.group() == CandidateGroup::Namespace)
        );
    }

    #[test]
    fn test_namespace_candidates_without_namespaces() {
        let selection: Arc<dyn NamespaceSelection> = Arc::new(MockNamespaceSelection::new());
        let candidates = namespace_candidates(&[], &selection);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].label(), ALL_NAMESPACES_LABEL);
    }

    #[test]
    fn test_namespace_callbacks_mutate_selection() {
        let mut mock = MockNamespaceSelection::new();
        mock.expect_select_all().times(1).return_const(());
        mock.expect_select_single()
            .withf(|name| name == "b")
            .times(1)
            .return_const(());
        let selection: Arc<dyn NamespaceSelection> = Arc::new(mock);

        let candidates =
            namespace_candidates(&[Namespace::new("a"), Namespace::new("b")], &selection);
        run(&candidates[0]);
        run(&candidates[2]);
    }

    #[test]
    fn test_catalog_callbacks_navigate() {
        let mut mock = MockNavigator::new();
        mock.expect_navigate()
            .withf(|path| path == "/deployments")
            .times(1)
            .return_const(());
        let navigator: Arc<dyn Navigator> = Arc::new(mock);

        let candidates = catalog_candidates(&navigator);
        assert_eq!(candidates.len(), STATIC_CATALOG.len());
        let deployments = candidates
            .iter()
            .find(|c| c.label() == "Workloads: Deployments")
            .unwrap();
        run(deployments);
    }

    #[test]
    fn test_custom_resource_candidates_carry_references() {
        let resource = CustomResourceType::new(
            "GitRepository",
            "source.toolkit.fluxcd.io",
            "v1",
            "gitrepositories",
        );
        let candidates = custom_resource_candidates(std::slice::from_ref(&resource));

        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].label(),
            "Git Repository — source.toolkit.fluxcd.io/v1 (gitrepositories)"
        );
        match candidates[0].action() {
            CandidateAction::ResourceReference(reference) => assert_eq!(reference, &resource),
            CandidateAction::Callback(_) => panic!("expected a resource reference"),
        }
    }

    #[test]
    fn test_custom_resource_path() {
        let resource = CustomResourceType::new(
            "HelmRelease",
            "helm.toolkit.fluxcd.io",
            "v2",
            "helmreleases",
        );
        assert_eq!(
            custom_resource_path(&resource),
            "/crd/helm.toolkit.fluxcd.io/helmreleases"
        );
    }
}
