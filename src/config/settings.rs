//! User settings for Splitify
//!
//! Manages user preferences: currency symbol, date format, the amount step used
//! by the entry form, the colour theme and the default log level.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::SplitifyPaths;
use crate::error::SplitifyError;
use crate::models::DEFAULT_CURRENCY;

/// Colour theme for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "Light"),
            Theme::Dark => write!(f, "Dark"),
        }
    }
}

/// User settings for Splitify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Increment applied by Up/Down on the amount field
    #[serde(default = "default_amount_step")]
    pub amount_step: f64,

    /// Dashboard colour theme
    #[serde(default)]
    pub theme: Theme,

    /// Default log filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_amount_step() -> f64 {
    100.0
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            amount_step: default_amount_step(),
            theme: Theme::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SplitifyPaths) -> Result<Self, SplitifyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SplitifyError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SplitifyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Check values that would otherwise fail at display time
    pub fn validate(&self) -> Result<(), SplitifyError> {
        let sample = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap_or_default();
        let mut buf = String::new();
        if write!(buf, "{}", sample.format(&self.date_format)).is_err() {
            return Err(SplitifyError::Config(format!(
                "Invalid date_format '{}' in settings file",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SplitifyPaths) -> Result<(), SplitifyError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SplitifyError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            SplitifyError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
