//! Operator settings for the fuel station
//!
//! Presentation preferences only. The price table is compiled in and is not
//! configurable here.

use serde::{Deserialize, Serialize};

use super::paths::StationPaths;
use crate::error::StationError;

/// Number of history entries shown by default
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Operator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Station name shown in the menu header
    #[serde(default = "default_station_name")]
    pub station_name: String,

    /// Currency symbol appended to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How many recent history entries to display
    #[serde(default = "default_history_limit")]
    pub history_display_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_station_name() -> String {
    "СеверНефть".to_string()
}

fn default_currency() -> String {
    "₽".to_string()
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            station_name: default_station_name(),
            currency_symbol: default_currency(),
            history_display_limit: default_history_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &StationPaths) -> Result<Self, StationError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                StationError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                StationError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &StationPaths) -> Result<(), StationError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            StationError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| StationError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.history_display_limit, 20);
        assert_eq!(settings.currency_symbol, "₽");
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StationPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.station_name = "Test Station".into();
        settings.history_display_limit = 5;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.station_name, "Test Station");
        assert_eq!(loaded.history_display_limit, 5);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"station_name":"X"}"#).unwrap();
        assert_eq!(loaded.station_name, "X");
        assert_eq!(loaded.history_display_limit, DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StationPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, StationError::Config(_)));
    }
}
