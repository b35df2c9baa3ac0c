//! Resource switcher
//!
//! A command-palette style overlay listing namespaces, built-in views and
//! custom resource types. A [`SwitcherSession`] lives exactly as long as the
//! overlay is mounted.

mod candidate;
pub mod catalog;
mod debounce;
mod highlight;
mod label;
mod preload;
mod session;

pub use candidate::{
    ALL_NAMESPACES_LABEL, CRD_PATH_PREFIX, Callback, Candidate, CandidateAction, CandidateGroup,
    catalog_candidates, custom_resource_candidates, custom_resource_path, namespace_candidates,
};
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use highlight::{HighlightSegment, highlight_label, segments_text};
pub use label::{custom_resource_label, format_resource_kind};
pub use preload::preload_stores;
pub use session::{
    LOADING_MESSAGE, NO_MATCHES_MESSAGE, NO_RESOURCES_MESSAGE, PLACEHOLDER, SwitcherSession,
};

use crate::host::{NamespaceSelection, Navigator, OverlayHost};
use crate::select::SelectOption;
use crate::store::{CustomResourceType, Namespace, ObjectStore};
use std::sync::Arc;
use std::time::Duration;

/// Tunables for a switcher session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitcherSettings {
    /// Delay between the last keystroke and the highlight update
    pub debounce: Duration,
    /// Reload the stores when the overlay opens
    pub preload_on_open: bool,
}

impl Default for SwitcherSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            preload_on_open: true,
        }
    }
}

/// Collaborators a switcher session reads from and acts on
#[derive(Clone)]
pub struct SwitcherContext {
    pub namespaces: Arc<dyn ObjectStore<Namespace>>,
    pub selection: Arc<dyn NamespaceSelection>,
    pub custom_resources: Arc<dyn ObjectStore<CustomResourceType>>,
    pub navigator: Arc<dyn Navigator>,
    pub overlay: Arc<dyn OverlayHost>,
    pub settings: SwitcherSettings,
}

impl SwitcherContext {
    pub fn new(
        namespaces: Arc<dyn ObjectStore<Namespace>>,
        selection: Arc<dyn NamespaceSelection>,
        custom_resources: Arc<dyn ObjectStore<CustomResourceType>>,
        navigator: Arc<dyn Navigator>,
        overlay: Arc<dyn OverlayHost>,
    ) -> Self {
        Self {
            namespaces,
            selection,
            custom_resources,
            navigator,
            overlay,
            settings: SwitcherSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: SwitcherSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Namespaces, built-in views, then custom resource types, from the
    /// stores' current snapshots
    pub fn build_candidates(&self) -> Vec<Candidate> {
        let mut candidates = namespace_candidates(&self.namespaces.items(), &self.selection);
        candidates.extend(catalog_candidates(&self.navigator));
        candidates.extend(custom_resource_candidates(&self.custom_resources.items()));
        candidates
    }
}

impl std::fmt::Debug for SwitcherContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitcherContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl SelectOption for Candidate {
    fn option_value(&self) -> &str {
        self.label()
    }
}
