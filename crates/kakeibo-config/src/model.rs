use std::{env, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const HOME_ENV: &str = "KAKEIBO_HOME";
const DEFAULT_DIR_NAME: &str = ".kakeibo";

/// Stores user-configurable projection preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_horizon_days_value")]
    pub default_horizon_days: u32,
    #[serde(default = "Config::default_highlight_limit_value")]
    pub highlight_limit: usize,
    #[serde(default)]
    pub include_sample_events: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "ja-JP".into(),
            currency: "JPY".into(),
            default_horizon_days: Self::default_horizon_days_value(),
            highlight_limit: Self::default_highlight_limit_value(),
            include_sample_events: false,
        }
    }
}

impl Config {
    pub fn default_horizon_days_value() -> u32 {
        30
    }

    pub fn default_highlight_limit_value() -> usize {
        5
    }

    /// Rejects values no projection could use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_horizon_days == 0 {
            return Err(ConfigError::Invalid(
                "default_horizon_days must be at least 1".into(),
            ));
        }
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency must not be empty".into()));
        }
        Ok(())
    }

    /// Application data directory: `$KAKEIBO_HOME`, else `~/.kakeibo`.
    pub fn resolve_base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }
}
