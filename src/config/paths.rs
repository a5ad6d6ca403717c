//! Path management for the fuel station
//!
//! ## Path Resolution Order
//!
//! 1. `STATION_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/fuel-station` on Linux,
//!    `~/Library/Application Support/fuel-station` on macOS,
//!    `%APPDATA%\fuel-station` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::StationError;
use crate::storage::StoreName;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "STATION_DATA_DIR";

/// Manages all paths used by the station
#[derive(Debug, Clone)]
pub struct StationPaths {
    /// Base directory for all station data
    base_dir: PathBuf,
}

impl StationPaths {
    /// Create a new StationPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, StationError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create StationPaths with a custom base directory (`--data-dir`, tests)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the snapshot stores
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the snapshot file for a named store (`data/<name>.json`)
    pub fn store_file(&self, store: StoreName) -> PathBuf {
        self.data_dir().join(format!("{}.json", store.as_str()))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), StationError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| StationError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| StationError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the station has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory for the current platform
fn resolve_default_path() -> Result<PathBuf, StationError> {
    ProjectDirs::from("", "", "fuel-station")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| StationError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StationPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);

        let paths = StationPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StationPaths::with_base_dir(temp_dir.path().join("station"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StationPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.store_file(StoreName::Tanks),
            temp_dir.path().join("data").join("tanks.json")
        );
        assert_eq!(
            paths.store_file(StoreName::History),
            temp_dir.path().join("data").join("history.json")
        );
    }
}
