//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Reminder settings
//! - Achievement streak thresholds
//! - Generative categorizer backend settings
//!
//! Configuration is stored at `~/.config/drillzy/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Reminder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Local hour of day (0-23) the reminder fires.
    #[serde(default = "default_reminder_hour")]
    pub reminder_hour: u32,
}

/// Achievement badge thresholds, in streak days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementsConfig {
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<u32>,
}

/// Generative categorizer backend settings. Disabled by default; the
/// deterministic tally rule is always the fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategorizerConfig {
    #[serde(default)]
    pub generative_enabled: bool,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub model: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/drillzy/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub achievements: AchievementsConfig,
    #[serde(default)]
    pub categorizer: CategorizerConfig,
}

fn default_true() -> bool {
    true
}
fn default_reminder_hour() -> u32 {
    18
}
fn default_thresholds() -> Vec<u32> {
    vec![3, 7, 14, 30]
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            reminder_hour: default_reminder_hour(),
        }
    }
}

impl Default for AchievementsConfig {
    fn default() -> Self {
        Self {
            thresholds: default_thresholds(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notifications: NotificationsConfig::default(),
            achievements: AchievementsConfig::default(),
            categorizer: CategorizerConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, std::io::Error> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first use.
    ///
    /// # Errors
    /// Returns [`ConfigError::LoadFailed`] if the config file exists but
    /// cannot be parsed, or [`ConfigError::SaveFailed`] if the default
    /// config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content)
                .map_err(|e| ConfigError::LoadFailed(format!("{}: {e}", path.display()))),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns [`ConfigError::SaveFailed`] if the config cannot be
    /// serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::SaveFailed(e.to_string()))?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveFailed(e.to_string()))?;
        std::fs::write(&path, content)
            .map_err(|e| ConfigError::SaveFailed(format!("{}: {e}", path.display())))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and persist.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownKey`] if the key names no field,
    /// [`ConfigError::InvalidValue`] if the value cannot be parsed into the
    /// field's type, or [`ConfigError::SaveFailed`] if the config cannot be
    /// saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self)
            .map_err(|e| ConfigError::SaveFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.save()?;
        Ok(())
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => serde_json::Value::Number(
                        value.parse::<u64>().map_err(|e| invalid(e.to_string()))?.into(),
                    ),
                    serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_product_thresholds() {
        let cfg = Config::default();
        assert!(cfg.notifications.enabled);
        assert_eq!(cfg.achievements.thresholds, vec![3, 7, 14, 30]);
        assert!(!cfg.categorizer.generative_enabled);
    }

    #[test]
    fn toml_round_trip() {
        let cfg = Config::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.achievements.thresholds, cfg.achievements.thresholds);
        assert_eq!(back.notifications.reminder_hour, cfg.notifications.reminder_hour);
    }

    #[test]
    fn empty_toml_fills_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.notifications.enabled);
        assert_eq!(cfg.achievements.thresholds, vec![3, 7, 14, 30]);
    }

    #[test]
    fn get_by_dotted_key() {
        let cfg = Config::default();
        assert_eq!(cfg.get("notifications.enabled").as_deref(), Some("true"));
        assert_eq!(cfg.get("notifications.reminder_hour").as_deref(), Some("18"));
        assert!(cfg.get("nonsense.key").is_none());
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        assert!(matches!(
            Config::set_json_value_by_path(&mut json, "no.such.key", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn set_rejects_unparseable_value() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        assert!(matches!(
            Config::set_json_value_by_path(&mut json, "notifications.reminder_hour", "soon"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            Config::set_json_value_by_path(&mut json, "notifications.enabled", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn set_parses_into_field_type() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "notifications.reminder_hour", "9").unwrap();
        let cfg: Config = serde_json::from_value(json).unwrap();
        assert_eq!(cfg.notifications.reminder_hour, 9);
    }
}
