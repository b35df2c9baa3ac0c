//! Platform detection for the activation chord

use serde::{Deserialize, Serialize};

const APPLE_PLATFORM_MARKERS: &[&str] = &["mac", "iphone", "ipod", "ipad"];

/// Keyboard convention the chord follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Command is the primary modifier
    Apple,
    /// Control is the primary modifier
    Other,
}

impl Platform {
    /// Classify a navigator-style platform string ("MacIntel", "Win32", ...)
    pub fn detect(platform: &str) -> Self {
        let platform = platform.to_lowercase();
        if APPLE_PLATFORM_MARKERS
            .iter()
            .any(|marker| platform.contains(marker))
        {
            Platform::Apple
        } else {
            Platform::Other
        }
    }

    /// Platform of the running process
    pub fn current() -> Self {
        Self::detect(navigator_platform())
    }

    pub fn is_apple(self) -> bool {
        self == Platform::Apple
    }

    /// Human-readable chord, e.g. "Ctrl+K"
    pub fn chord_label(self) -> &'static str {
        match self {
            Platform::Apple => "Cmd+K",
            Platform::Other => "Ctrl+K",
        }
    }
}

/// Navigator-style platform string for the build target
pub fn navigator_platform() -> &'static str {
    match std::env::consts::OS {
        "macos" => "MacIntel",
        "ios" => "iPhone",
        "windows" => "Win32",
        "linux" => "Linux x86_64",
        other => other,
    }
}

/// Configured platform convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformSetting {
    #[default]
    Auto,
    Apple,
    Other,
}

impl PlatformSetting {
    pub fn resolve(self) -> Platform {
        match self {
            PlatformSetting::Auto => Platform::current(),
            PlatformSetting::Apple => Platform::Apple,
            PlatformSetting::Other => Platform::Other,
        }
    }
}

impl std::str::FromStr for PlatformSetting {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "auto" => Ok(PlatformSetting::Auto),
            "apple" | "mac" | "macos" => Ok(PlatformSetting::Apple),
            "other" => Ok(PlatformSetting::Other),
            _ => Err(anyhow::anyhow!(
                "platform must be 'auto', 'apple' or 'other', got '{}'",
                value
            )),
        }
    }
}

impl std::fmt::Display for PlatformSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlatformSetting::Auto => "auto",
            PlatformSetting::Apple => "apple",
            PlatformSetting::Other => "other",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_apple_platforms() {
        assert_eq!(Platform::detect("MacIntel"), Platform::Apple);
        assert_eq!(Platform::detect("iPhone"), Platform::Apple);
        assert_eq!(Platform::detect("iPad"), Platform::Apple);
        assert_eq!(Platform::detect("iPod touch"), Platform::Apple);
        assert_eq!(Platform::detect("macintosh"), Platform::Apple);
    }

    #[test]
    fn test_detect_other_platforms() {
        assert_eq!(Platform::detect("Win32"), Platform::Other);
        assert_eq!(Platform::detect("Linux x86_64"), Platform::Other);
        assert_eq!(Platform::detect(""), Platform::Other);
    }

    #[test]
    fn test_platform_setting_parse() {
        assert_eq!("auto".parse::<PlatformSetting>().unwrap(), PlatformSetting::Auto);
        assert_eq!("Apple".parse::<PlatformSetting>().unwrap(), PlatformSetting::Apple);
        assert_eq!("other".parse::<PlatformSetting>().unwrap(), PlatformSetting::Other);
        assert!("linux".parse::<PlatformSetting>().is_err());
    }

    #[test]
    fn test_forced_settings_resolve() {
        assert_eq!(PlatformSetting::Apple.resolve(), Platform::Apple);
        assert_eq!(PlatformSetting::Other.resolve(), Platform::Other);
    }
}
