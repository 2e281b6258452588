//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Default pet name (used on first load and reset)
//! - Starting coin balance for a fresh productivity record
//! - Polling period for the decay/duration tick loop
//!
//! Configuration is stored at `~/.config/workpet/config.toml`. Gameplay
//! numbers (decay rates, action costs and effects, the earning floor) are
//! fixed constants, not configuration.

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;
use crate::pet::DEFAULT_NAME;
use crate::productivity::STARTING_COINS;

/// Pet-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetConfig {
    #[serde(default = "default_pet_name")]
    pub default_name: String,
}

/// Economy-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyConfig {
    #[serde(default = "default_starting_coins")]
    pub starting_coins: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/workpet/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pet: PetConfig,
    #[serde(default)]
    pub economy: EconomyConfig,
    /// Period of the polling loop that drives decay and live durations.
    #[serde(default = "default_tick_period_secs")]
    pub tick_period_secs: u64,
}

fn default_pet_name() -> String {
    DEFAULT_NAME.to_string()
}
fn default_starting_coins() -> u64 {
    STARTING_COINS
}
fn default_tick_period_secs() -> u64 {
    60
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            default_name: default_pet_name(),
        }
    }
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_coins: default_starting_coins(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pet: PetConfig::default(),
            economy: EconomyConfig::default(),
            tick_period_secs: default_tick_period_secs(),
        }
    }
}

impl Config {
    fn path() -> Result<std::path::PathBuf, ConfigError> {
        data_dir()
            .map(|d| d.join("config.toml"))
            .map_err(|e| ConfigError::LoadFailed {
                path: "~/.config/workpet/config.toml".into(),
                message: e.to_string(),
            })
    }

    /// Load from disk, writing the defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
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
    ///
    /// Returns an error if the config cannot be serialized or written.
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

    /// Get a config value as a string by dot-separated key
    /// (e.g. `pet.default_name`).
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(match current {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Set a config value by dot-separated key, coercing the string to the
    /// existing value's type, and persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys, values that don't parse as the
    /// key's type, or a failed write.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        let unknown = || ConfigError::UnknownKey(key.to_string());
        let mut current = &mut json;
        let mut parts = key.split('.').peekable();
        loop {
            let part = parts.next().ok_or_else(unknown)?;
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;
                let new_value = match existing {
                    serde_json::Value::Number(_) => {
                        let n = value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: format!("cannot parse '{value}' as number"),
                        })?;
                        serde_json::Value::Number(n.into())
                    }
                    _ => serde_json::Value::String(value.to_string()),
                };
                obj.insert(part.to_string(), new_value);
                break;
            }
            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.save()
    }
}
