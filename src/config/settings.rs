//! User settings for Monthwise
//!
//! Manages display preferences and the staleness window of the snapshot cache.

use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::MonthwisePaths;
use crate::error::MonthwiseError;

/// User settings for Monthwise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Minutes a fetched snapshot is served before it is considered stale
    #[serde(default = "default_cache_stale_minutes")]
    pub cache_stale_minutes: u64,

    /// Base URL of the finance API the data layer talks to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₦".to_string()
}

/// Date format used when settings do not override it
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_cache_stale_minutes() -> u64 {
    2
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            cache_stale_minutes: default_cache_stale_minutes(),
            api_base_url: None,
        }
    }
}

impl Settings {
    /// Staleness window for the snapshot cache
    pub fn cache_stale_after(&self) -> Duration {
        Duration::from_secs(self.cache_stale_minutes * 60)
    }

    /// Reject settings that would fail at display time
    pub fn validate(&self) -> Result<(), MonthwiseError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(MonthwiseError::Config(format!(
                "Invalid date_format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &MonthwisePaths) -> Result<Self, MonthwiseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                MonthwiseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                MonthwiseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MonthwisePaths) -> Result<(), MonthwiseError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            MonthwiseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            MonthwiseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
