//! Configuration loading
//!
//! Precedence order (highest to lowest):
//! 1. Environment variable overrides
//! 2. Root config file
//! 3. Built-in defaults

use super::{paths, schema::Config};
use crate::hotkey::PlatformSetting;
use anyhow::{Context, Result};
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers applied
    pub fn load() -> Result<Config> {
        let path = paths::root_config_path();
        let config = if path.exists() {
            Self::load_file(&path)?
        } else {
            Self::load_defaults()
        };

        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the root configuration file, if there is one
    ///
    /// Fails on invalid YAML, invalid value types, a zero debounce delay and
    /// file read errors.
    pub fn validate() -> Result<()> {
        let config = Self::load().context("Failed to load configuration")?;

        if config.switcher.debounce_ms == 0 {
            return Err(anyhow::anyhow!(
                "switcher.debounceMs must be greater than 0"
            ));
        }

        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        Config::default()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        // KSWITCH_DEBOUNCE_MS override
        if let Ok(debounce) = std::env::var("KSWITCH_DEBOUNCE_MS") {
            match debounce.parse::<u64>() {
                Ok(ms) => config.switcher.debounce_ms = ms,
                Err(_) => tracing::warn!("Ignoring invalid KSWITCH_DEBOUNCE_MS '{}'", debounce),
            }
        }

        // KSWITCH_PLATFORM override
        if let Ok(platform) = std::env::var("KSWITCH_PLATFORM") {
            match platform.parse::<PlatformSetting>() {
                Ok(setting) => config.hotkey.platform = setting,
                Err(e) => tracing::warn!("Ignoring KSWITCH_PLATFORM: {}", e),
            }
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}
