//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use crate::hotkey::PlatformSetting;
use crate::switcher::SwitcherSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Resource switcher behavior
    #[serde(default)]
    pub switcher: SwitcherConfig,

    /// Activation hotkey
    #[serde(default)]
    pub hotkey: HotkeyConfig,
}

/// Resource switcher configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwitcherConfig {
    /// Milliseconds between the last keystroke and the highlight update
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Reload namespaces and CRDs whenever the switcher opens
    #[serde(default = "default_true")]
    pub preload_on_open: bool,
}

/// Hotkey configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotkeyConfig {
    /// Modifier convention: auto-detect, Apple (Cmd+K) or other (Ctrl+K)
    #[serde(default)]
    pub platform: PlatformSetting,
}

fn default_debounce_ms() -> u64 {
    150
}

fn default_true() -> bool {
    true
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            preload_on_open: default_true(),
        }
    }
}

impl SwitcherConfig {
    pub fn settings(&self) -> SwitcherSettings {
        SwitcherSettings {
            debounce: Duration::from_millis(self.debounce_ms),
            preload_on_open: self.preload_on_open,
        }
    }
}
