//! Switcher session state
//!
//! Created when the overlay mounts and dropped when it unmounts. The search
//! value follows every keystroke; the highlight value trails it by one
//! debounce window and any pending update dies with the session.

use super::candidate::{Candidate, CandidateAction, custom_resource_path};
use super::debounce::Debouncer;
use super::highlight::{HighlightSegment, highlight_label};
use super::preload::preload_stores;
use super::SwitcherContext;
use crate::select::{InputAction, SelectBehavior};
use std::time::Instant;
use tokio::task::JoinHandle;

pub const PLACEHOLDER: &str = "Switch to Resource";
pub const LOADING_MESSAGE: &str = "Loading CRDs...";
pub const NO_MATCHES_MESSAGE: &str = "No matches";
pub const NO_RESOURCES_MESSAGE: &str = "No resources found";

pub struct SwitcherSession {
    context: SwitcherContext,
    search_value: String,
    highlight_value: String,
    highlight_debounce: Debouncer<String>,
    preload_task: Option<JoinHandle<()>>,
}

impl SwitcherSession {
    /// Start a session, kicking off the store preload if enabled
    pub fn open(context: SwitcherContext) -> Self {
        let preload_task = if context.settings.preload_on_open {
            preload_stores(&context)
        } else {
            None
        };

        tracing::debug!("Resource switcher opened");

        Self {
            highlight_debounce: Debouncer::new(context.settings.debounce),
            context,
            search_value: String::new(),
            highlight_value: String::new(),
            preload_task,
        }
    }

    /// Raw input text
    pub fn search_value(&self) -> &str {
        &self.search_value
    }

    /// Debounced term used for highlighting
    pub fn highlight_value(&self) -> &str {
        &self.highlight_value
    }

    /// Input change handler. Only user edits update the search; the value
    /// is returned unchanged so the list keeps showing it.
    pub fn on_input_change(&mut self, value: &str, action: InputAction, now: Instant) -> String {
        if action == InputAction::InputChange {
            self.search_value = value.to_string();
            self.highlight_debounce
                .schedule(self.search_value.clone(), now);
        }
        value.to_string()
    }

    /// Apply a due highlight update. Returns true if the highlight changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.highlight_debounce.poll(now) {
            Some(value) if value != self.highlight_value => {
                self.highlight_value = value;
                true
            }
            _ => false,
        }
    }

    /// When the next highlight update is due, if one is pending
    pub fn next_deadline(&self) -> Option<Instant> {
        self.highlight_debounce.deadline()
    }

    /// The full candidate list for this render
    pub fn candidates(&self) -> Vec<Candidate> {
        self.context.build_candidates()
    }

    /// Option label renderer
    pub fn render_label(&self, label: &str) -> Vec<HighlightSegment> {
        highlight_label(label, &self.highlight_value)
    }

    /// Custom resource types are still loading for the first time
    pub fn is_loading(&self) -> bool {
        let store = &self.context.custom_resources;
        store.is_loading() && !store.is_loaded()
    }

    pub fn loading_message(&self) -> &'static str {
        LOADING_MESSAGE
    }

    pub fn no_options_message(&self) -> &'static str {
        if self.search_value.is_empty() {
            NO_RESOURCES_MESSAGE
        } else {
            NO_MATCHES_MESSAGE
        }
    }

    pub fn behavior(&self) -> SelectBehavior {
        SelectBehavior {
            menu_is_open: true,
            is_clearable: false,
            auto_focus: true,
            escape_clears_value: false,
            placeholder: PLACEHOLDER,
        }
    }

    /// Run the chosen candidate's action and ask the host to close the
    /// overlay. Returns false, leaving the overlay open, when nothing was
    /// chosen.
    pub fn commit(&self, candidate: Option<&Candidate>) -> bool {
        let Some(candidate) = candidate else {
            return false;
        };

        match candidate.action() {
            CandidateAction::Callback(callback) => callback(),
            CandidateAction::ResourceReference(resource) => {
                let path = custom_resource_path(resource);
                tracing::debug!("Switching to custom resource view {}", path);
                self.context.navigator.navigate(&path);
            }
        }

        self.context.overlay.close();
        true
    }

    /// Handle of the preload task started by [`SwitcherSession::open`]
    pub fn take_preload_task(&mut self) -> Option<JoinHandle<()>> {
        self.preload_task.take()
    }
}

impl Drop for SwitcherSession {
    fn drop(&mut self) {
        if self.highlight_debounce.cancel() {
            tracing::trace!("Discarded pending highlight update");
        }
        tracing::debug!("Resource switcher closed");
    }
}

impl std::fmt::Debug for SwitcherSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitcherSession")
            .field("search_value", &self.search_value)
            .field("highlight_value", &self.highlight_value)
            .field("highlight_debounce", &self.highlight_debounce)
            .finish_non_exhaustive()
    }
}
