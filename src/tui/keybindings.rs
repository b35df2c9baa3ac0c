//! Centralized keybindings
//!
//! Single source of truth for the key hints shown in the footer.

use crate::hotkey::Platform;

/// Key hint with keybinding and label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// The keybinding string (e.g., "Ctrl+K", "Enter")
    pub key: &'static str,
    /// The human-readable label (e.g., "Switch", "Open")
    pub label: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Hints for the dashboard while the switcher is closed
pub fn dashboard_hints(platform: Platform) -> Vec<KeyHint> {
    vec![
        KeyHint::new(platform.chord_label(), "Switch resource"),
        KeyHint::new("q", "Quit"),
    ]
}

/// Hints while the switcher is open
pub fn switcher_hints() -> Vec<KeyHint> {
    vec![
        KeyHint::new("↑/↓", "Navigate"),
        KeyHint::new("Enter", "Open"),
        KeyHint::new("Esc", "Close"),
    ]
}
