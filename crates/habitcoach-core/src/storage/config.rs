//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Theme (dark/light)
//! - The onboarding-complete flag
//! - Coach language selection for live sessions
//!
//! Configuration is stored at `~/.config/habitcoach/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub dark_mode: bool,
}

/// Coach configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachConfig {
    /// Spoken language for live sessions. Changing it tears down and
    /// rebuilds the session; it is not a live parameter update.
    #[serde(default = "default_language")]
    pub language: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/habitcoach/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub coach: CoachConfig,
    /// First-run onboarding has been completed.
    #[serde(default)]
    pub onboarded: bool,
}

fn default_language() -> String {
    "en-US".into()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { dark_mode: false }
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            coach: CoachConfig::default(),
            onboarded: false,
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        super::data_dir()
            .map(|d| d.join("config.toml"))
            .map_err(|e| ConfigError::SaveFailed {
                path: PathBuf::from("config.toml"),
                message: e.to_string(),
            })
    }

    /// Load from disk or return default.
    ///
    /// A missing or unreadable file yields the default config; a file
    /// that exists but fails to parse also falls back to default so
    /// startup never fails on bad state.
    pub fn load_or_default() -> Self {
        let Ok(path) = Self::path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "ui.dark_mode" => Some(self.ui.dark_mode.to_string()),
            "coach.language" => Some(self.coach.language.clone()),
            "onboarded" => Some(self.onboarded.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key. Returns an error for unknown keys or
    /// unparsable values; does not save.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "ui.dark_mode" => {
                self.ui.dark_mode = parse_bool(key, value)?;
            }
            "coach.language" => {
                self.coach.language = value.to_string();
            }
            "onboarded" => {
                self.onboarded = parse_bool(key, value)?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("cannot parse '{value}' as bool"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert!(!parsed.ui.dark_mode);
        assert!(!parsed.onboarded);
        assert_eq!(parsed.coach.language, "en-US");
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("ui.dark_mode").as_deref(), Some("false"));
        assert_eq!(cfg.get("coach.language").as_deref(), Some("en-US"));
        assert!(cfg.get("ui.missing_key").is_none());
    }

    #[test]
    fn set_updates_known_keys() {
        let mut cfg = Config::default();
        cfg.set("ui.dark_mode", "true").unwrap();
        cfg.set("coach.language", "ja-JP").unwrap();
        cfg.set("onboarded", "true").unwrap();
        assert!(cfg.ui.dark_mode);
        assert_eq!(cfg.coach.language, "ja-JP");
        assert!(cfg.onboarded);
    }

    #[test]
    fn set_rejects_unknown_key_and_bad_value() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("ui.nonexistent", "true"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            cfg.set("ui.dark_mode", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn empty_toml_parses_with_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert!(!parsed.ui.dark_mode);
        assert_eq!(parsed.coach.language, "en-US");
    }
}
