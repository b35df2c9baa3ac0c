//! Configuration system for kswitch
//!
//! YAML configuration file with environment variable overrides, plus the
//! dot-notation accessors used by the `config` subcommand.

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, HotkeyConfig, SwitcherConfig};

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "switcher.debounceMs" => Ok(config.switcher.debounce_ms.to_string()),
        "switcher.preloadOnOpen" => Ok(config.switcher.preload_on_open.to_string()),
        "hotkey.platform" => Ok(config.hotkey.platform.to_string()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "switcher.debounceMs" => {
            config.switcher.debounce_ms = value
                .parse()
                .context("switcher.debounceMs must be a number")?;
        }
        "switcher.preloadOnOpen" => {
            config.switcher.preload_on_open = value
                .parse()
                .context("switcher.preloadOnOpen must be 'true' or 'false'")?;
        }
        "hotkey.platform" => {
            config.hotkey.platform = value.parse()?;
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotkey::PlatformSetting;

    #[test]
    fn test_get_config_value() {
        let config = Config::default();
        assert_eq!(get_config_value(&config, "switcher.debounceMs").unwrap(), "150");
        assert_eq!(get_config_value(&config, "switcher.preloadOnOpen").unwrap(), "true");
        assert_eq!(get_config_value(&config, "hotkey.platform").unwrap(), "auto");
        assert!(get_config_value(&config, "ui.skin").is_err());
    }

    #[test]
    fn test_set_config_value() {
        let mut config = Config::default();
        set_config_value(&mut config, "switcher.debounceMs", "200").unwrap();
        set_config_value(&mut config, "switcher.preloadOnOpen", "false").unwrap();
        set_config_value(&mut config, "hotkey.platform", "other").unwrap();

        assert_eq!(config.switcher.debounce_ms, 200);
        assert!(!config.switcher.preload_on_open);
        assert_eq!(config.hotkey.platform, PlatformSetting::Other);
    }

    #[test]
    fn test_set_config_value_rejects_bad_input() {
        let mut config = Config::default();
        assert!(set_config_value(&mut config, "switcher.debounceMs", "soon").is_err());
        assert!(set_config_value(&mut config, "switcher.preloadOnOpen", "maybe").is_err());
        assert!(set_config_value(&mut config, "hotkey.platform", "beos").is_err());
        assert!(set_config_value(&mut config, "nope", "1").is_err());
        assert_eq!(config, Config::default());
    }
}
