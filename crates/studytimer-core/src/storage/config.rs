//! TOML-based application configuration.
//!
//! Stores the timer interval durations and display preferences.
//! Configuration is stored at `~/.config/studytimer/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, Result, ValidationError};
use crate::timer::{
    TimerConfig, DEFAULT_FOCUS_MIN, DEFAULT_LONG_BREAK_INTERVAL, DEFAULT_LONG_BREAK_MIN,
    DEFAULT_SHORT_BREAK_MIN,
};

/// Interval durations, in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSection {
    #[serde(default = "default_focus_duration")]
    pub focus_duration: u32,
    #[serde(default = "default_short_break")]
    pub short_break: u32,
    #[serde(default = "default_long_break")]
    pub long_break: u32,
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: u32,
}

/// Terminal display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Print a line for every tick, not only for state changes.
    #[serde(default = "default_true")]
    pub show_ticks: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studytimer/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerSection,
    #[serde(default)]
    pub display: DisplaySection,
}

// Default functions
fn default_focus_duration() -> u32 {
    DEFAULT_FOCUS_MIN
}
fn default_short_break() -> u32 {
    DEFAULT_SHORT_BREAK_MIN
}
fn default_long_break() -> u32 {
    DEFAULT_LONG_BREAK_MIN
}
fn default_long_break_interval() -> u32 {
    DEFAULT_LONG_BREAK_INTERVAL
}
fn default_true() -> bool {
    true
}

impl Default for TimerSection {
    fn default() -> Self {
        Self {
            focus_duration: default_focus_duration(),
            short_break: default_short_break(),
            long_break: default_long_break(),
            long_break_interval: default_long_break_interval(),
        }
    }
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self { show_ticks: true }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(root: &mut serde_json::Value, key: &str, value: &str) -> Result<()> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ValidationError::InvalidValue {
            field: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        let mut current = root;
        while let Some(part) = parts.next() {
            if part.is_empty() {
                return Err(unknown().into());
            }
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;
            let new_value = match existing {
                serde_json::Value::Bool(_) => value
                    .parse::<bool>()
                    .map(serde_json::Value::Bool)
                    .map_err(|_| invalid(format!("cannot parse '{value}' as true/false")))?,
                serde_json::Value::Number(_) => value
                    .parse::<u32>()
                    .map(|n| serde_json::Value::Number(n.into()))
                    .map_err(|_| invalid(format!("cannot parse '{value}' as a whole number")))?,
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    return Err(invalid("not a leaf value".to_string()).into());
                }
                _ => serde_json::Value::String(value.into()),
            };
            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown().into())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| {
                ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
                .into()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config missing, writing defaults");
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, in memory only.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the result would be an invalid timer configuration. On error
    /// `self` is left unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json)?;
        updated.timer_config()?;
        *self = updated;
        Ok(())
    }

    /// Validated timer durations.
    pub fn timer_config(&self) -> Result<TimerConfig, ConfigError> {
        let t = &self.timer;
        TimerConfig::new(t.focus_duration, t.short_break, t.long_break)?
            .with_long_break_interval(t.long_break_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::timer::Mode;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let parsed: Config = toml::from_str("[timer]\nfocus_duration = 50\n").unwrap();
        assert_eq!(parsed.timer.focus_duration, 50);
        assert_eq!(parsed.timer.short_break, 5);
        assert_eq!(parsed.timer.long_break, 15);
        assert!(parsed.display.show_ticks);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("timer.focus_duration").as_deref(), Some("25"));
        assert_eq!(cfg.get("display.show_ticks").as_deref(), Some("true"));
        assert!(cfg.get("timer.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_nested_number() {
        let mut cfg = Config::default();
        cfg.set("timer.long_break", "20").unwrap();
        assert_eq!(cfg.timer.long_break, 20);
        assert_eq!(cfg.timer_config().unwrap().duration_secs(Mode::LongBreak), 1200);
    }

    #[test]
    fn set_updates_nested_bool() {
        let mut cfg = Config::default();
        cfg.set("display.show_ticks", "false").unwrap();
        assert!(!cfg.display.show_ticks);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        let err = cfg.set("timer.nonexistent_key", "1").unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        assert!(cfg.set("display.show_ticks", "not_a_bool").is_err());
        assert!(cfg.set("timer.focus_duration", "-3").is_err());
        assert!(cfg.set("timer", "1").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn set_rejects_zero_duration() {
        let mut cfg = Config::default();
        let err = cfg.set("timer.short_break", "0").unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::InvalidValue { .. })));
        assert_eq!(cfg.timer.short_break, 5);
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.set("timer.focus_duration", "45").unwrap();
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.timer.focus_duration, 45);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timer = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::LoadFailed { .. })));
    }

    #[test]
    fn invalid_file_values_surface_from_timer_config() {
        let cfg: Config = toml::from_str("[timer]\nfocus_duration = 0\n").unwrap();
        assert!(cfg.timer_config().is_err());
    }
}
