//! kswitch library
//!
//! Command-palette style resource switcher for Kubernetes dashboards: a
//! global hotkey gate, the switcher session with debounced highlighting, the
//! store and host contracts it depends on, and a terminal host.

pub mod config;
pub mod host;
pub mod hotkey;
pub mod kube;
pub mod select;
pub mod store;
pub mod switcher;
#[cfg(feature = "tui")]
pub mod tui;

// Re-export commonly used types for convenience
pub use host::{NamespaceSelection, Navigator, OverlayContent, OverlayHost};
pub use hotkey::{HotkeyGate, KeyEvent, KeyEventDispatcher, Platform};
pub use store::{CustomResourceType, MemoryStore, Namespace, ObjectStore, StoreError};
pub use switcher::{Candidate, CandidateAction, SwitcherContext, SwitcherSession};
