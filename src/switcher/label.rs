//! Display labels for custom resource types

use crate::store::CustomResourceType;

/// Split a kind at title-case boundaries: "ConfigMap" -> "Config Map",
/// "CRDFoo" -> "CRD Foo".
pub fn format_resource_kind(kind: &str) -> String {
    let chars: Vec<char> = kind.chars().collect();
    let mut formatted = String::with_capacity(kind.len() + 4);

    for (idx, &ch) in chars.iter().enumerate() {
        if idx > 0 {
            let prev = chars[idx - 1];
            let next = chars.get(idx + 1).copied();
            let lower_to_upper = prev.is_ascii_lowercase() && ch.is_ascii_uppercase();
            let acronym_end = prev.is_ascii_uppercase()
                && ch.is_ascii_uppercase()
                && next.is_some_and(|n| n.is_ascii_lowercase());
            if lower_to_upper || acronym_end {
                formatted.push(' ');
            }
        }
        formatted.push(ch);
    }

    formatted
}

/// Switcher label for a custom resource type:
/// "Helm Release — helm.toolkit.fluxcd.io/v2 (helmreleases)"
pub fn custom_resource_label(resource: &CustomResourceType) -> String {
    format!(
        "{} — {}/{} ({})",
        format_resource_kind(resource.kind()),
        resource.group(),
        resource.version(),
        resource.plural()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_simple_kinds() {
        assert_eq!(format_resource_kind("ConfigMap"), "Config Map");
        assert_eq!(format_resource_kind("HelmRelease"), "Helm Release");
        assert_eq!(format_resource_kind("Kustomization"), "Kustomization");
    }

    #[test]
    fn test_format_acronym_runs() {
        assert_eq!(format_resource_kind("CRDFoo"), "CRD Foo");
        assert_eq!(format_resource_kind("OCIRepository"), "OCI Repository");
        assert_eq!(format_resource_kind("HTTPRoute"), "HTTP Route");
        assert_eq!(format_resource_kind("IPAddressPool"), "IP Address Pool");
    }

    #[test]
    fn test_format_edge_cases() {
        assert_eq!(format_resource_kind(""), "");
        assert_eq!(format_resource_kind("CRD"), "CRD");
        assert_eq!(format_resource_kind("lowercase"), "lowercase");
        assert_eq!(format_resource_kind("Pod2Spec"), "Pod2Spec");
    }

    #[test]
    fn test_custom_resource_label() {
        let resource =
            CustomResourceType::new("HelmRelease", "helm.toolkit.fluxcd.io", "v2", "helmreleases");
        assert_eq!(
            custom_resource_label(&resource),
            "Helm Release — helm.toolkit.fluxcd.io/v2 (helmreleases)"
        );
    }
}
