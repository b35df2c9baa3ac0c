//! Built-in resource views
//!
//! Fixed for the lifetime of the process; order is the display order.

/// (label, navigation path) for every built-in view
pub const STATIC_CATALOG: &[(&str, &str)] = &[
    ("Overview: Cluster Overview", "/overview"),
    ("Workloads: Overview", "/workloads"),
    ("Cluster: Nodes", "/nodes"),
    ("Cluster: Namespaces", "/namespaces"),
    ("Cluster: Events", "/events"),
    ("Workloads: Pods", "/pods"),
    ("Workloads: Deployments", "/deployments"),
    ("Workloads: DaemonSets", "/daemonsets"),
    ("Workloads: StatefulSets", "/statefulsets"),
    ("Workloads: ReplicaSets", "/replicasets"),
    ("Workloads: Jobs", "/jobs"),
    ("Workloads: CronJobs", "/cronjobs"),
    ("Network: Services", "/services"),
    ("Network: Ingresses", "/ingresses"),
    ("Network: Ingress Classes", "/ingress-classes"),
    ("Network: NetworkPolicies", "/network-policies"),
    ("Network: Endpoints", "/endpoints"),
    ("Network: Endpoint Slices", "/endpoint-slices"),
    ("Network: Port Forwarding", "/port-forwards"),
    ("Config: ConfigMaps", "/config-maps"),
    ("Config: Secrets", "/secrets"),
    ("Config: ResourceQuotas", "/resource-quotas"),
    ("Config: LimitRanges", "/limit-ranges"),
    (
        "Config: Horizontal Pod Autoscalers",
        "/horizontal-pod-autoscalers",
    ),
    ("Config: Vertical Pod Autoscalers", "/vertical-pod-autoscalers"),
    ("Config: PodDisruptionBudgets", "/pod-disruption-budgets"),
    ("Config: PriorityClasses", "/priority-classes"),
    ("Config: Leases", "/leases"),
    ("Config: Runtime Classes", "/runtime-classes"),
    (
        "Config: MutatingWebhookConfigurations",
        "/mutating-webhook-configurations",
    ),
    (
        "Config: ValidatingWebhookConfigurations",
        "/validating-webhook-configurations",
    ),
    ("Storage: Storage Classes", "/storage-classes"),
    ("Storage: Persistent Volumes", "/persistent-volumes"),
    (
        "Storage: Persistent Volume Claims",
        "/persistent-volume-claims",
    ),
    ("Access Control: ServiceAccounts", "/service-accounts"),
    ("Access Control: Roles", "/roles"),
    ("Access Control: RoleBindings", "/role-bindings"),
    ("Access Control: ClusterRoles", "/cluster-roles"),
    ("Access Control: ClusterRoleBindings", "/cluster-role-bindings"),
    ("Access Control: PodSecurityPolicies", "/pod-security-policies"),
    ("Helm: Charts", "/helm/charts"),
    ("Helm: Releases", "/helm/releases"),
    ("Custom Resources: Definitions", "/crd/definitions"),
];

/// Look up the path of a built-in view by label
pub fn catalog_path(label: &str) -> Option<&'static str> {
    STATIC_CATALOG
        .iter()
        .find(|(entry_label, _)| *entry_label == label)
        .map(|(_, path)| *path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_labels_are_unique_and_non_empty() {
        let labels: HashSet<&str> = STATIC_CATALOG.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels.len(), STATIC_CATALOG.len());
        assert!(labels.iter().all(|label| !label.is_empty()));
    }

    #[test]
    fn test_catalog_paths_are_absolute() {
        for (label, path) in STATIC_CATALOG {
            assert!(path.starts_with('/'), "{} has relative path {}", label, path);
        }
    }

    #[test]
    fn test_catalog_order() {
        assert_eq!(STATIC_CATALOG.len(), 43);
        assert_eq!(STATIC_CATALOG[0].0, "Overview: Cluster Overview");
        assert_eq!(
            STATIC_CATALOG[STATIC_CATALOG.len() - 1].0,
            "Custom Resources: Definitions"
        );
    }

    #[test]
    fn test_catalog_path_lookup() {
        assert_eq!(catalog_path("Workloads: Pods"), Some("/pods"));
        assert_eq!(catalog_path("Helm: Releases"), Some("/helm/releases"));
        assert_eq!(catalog_path("Workloads: Nope"), None);
    }
}
