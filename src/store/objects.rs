//! Domain objects read by the switcher

/// A namespace known to the namespace store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    name: String,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A custom resource type discovered from the cluster's CRDs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomResourceType {
    kind: String,
    group: String,
    version: String,
    plural: String,
}

impl CustomResourceType {
    pub fn new(
        kind: impl Into<String>,
        group: impl Into<String>,
        version: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            group: group.into(),
            version: version.into(),
            plural: plural.into(),
        }
    }

    /// Resource kind, e.g. "HelmRelease"
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// API group, e.g. "helm.toolkit.fluxcd.io"
    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Plural resource name, e.g. "helmreleases"
    pub fn plural(&self) -> &str {
        &self.plural
    }
}
