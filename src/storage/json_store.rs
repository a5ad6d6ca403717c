//! JSON file snapshot stores
//!
//! One file per store under `<base>/data/`, e.g. `data/tanks.json`. A save
//! writes `<name>.json.tmp` next to the snapshot and renames it over the old
//! file, so a reader sees either the previous document or the new one.

use std::fs::{self, File};
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::paths::StationPaths;
use crate::error::{StationError, StationResult};

use super::{Persistence, StoreName};

/// State of a store's file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Missing,
    Valid,
    Corrupt,
}

/// Snapshot stores backed by JSON files
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    paths: StationPaths,
}

impl JsonFileStore {
    /// Open the stores under `paths`, creating the directories if needed
    pub fn open(paths: StationPaths) -> StationResult<Self> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &StationPaths {
        &self.paths
    }

    /// Report whether a store's snapshot is absent, readable or damaged
    pub fn status(&self, store: StoreName) -> StoreStatus {
        match self.read_snapshot(store) {
            Ok(None) => StoreStatus::Missing,
            Ok(Some(_)) => StoreStatus::Valid,
            Err(_) => StoreStatus::Corrupt,
        }
    }

    fn snapshot_path(&self, store: StoreName) -> PathBuf {
        self.paths.store_file(store)
    }

    fn read_snapshot(&self, store: StoreName) -> StationResult<Option<Value>> {
        let path = self.snapshot_path(store);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StationError::Storage(format!(
                    "Cannot read {} store at {}: {}",
                    store,
                    path.display(),
                    e
                )))
            }
        };

        serde_json::from_slice(&bytes).map(Some).map_err(|e| {
            StationError::Storage(format!(
                "{} store at {} is not valid JSON: {}",
                store,
                path.display(),
                e
            ))
        })
    }

    fn write_snapshot(&self, store: StoreName, document: &Value) -> StationResult<()> {
        let path = self.snapshot_path(store);
        let staged = path.with_extension("json.tmp");
        let failed = |step: &str, e: &dyn std::fmt::Display| {
            StationError::Storage(format!("Cannot {} {} store: {}", step, store, e))
        };

        let mut body = serde_json::to_vec_pretty(document).map_err(|e| failed("encode", &e))?;
        body.push(b'\n');

        let mut file = File::create(&staged).map_err(|e| failed("stage", &e))?;
        file.write_all(&body)
            .and_then(|()| file.sync_all())
            .map_err(|e| failed("write", &e))?;
        drop(file);

        if let Err(e) = fs::rename(&staged, &path) {
            if let Err(cleanup) = fs::remove_file(&staged) {
                warn!(store = %store, error = %cleanup, "Left staged snapshot behind");
            }
            return Err(failed("replace", &e));
        }

        debug!(store = %store, bytes = body.len(), "Snapshot written");
        Ok(())
    }
}

impl Persistence for JsonFileStore {
    fn load(&self, store: StoreName) -> StationResult<Option<Value>> {
        self.read_snapshot(store)
    }

    fn save(&self, store: StoreName, document: &Value) -> StationResult<()> {
        self.write_snapshot(store, document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonFileStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = StationPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = JsonFileStore::open(paths).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_open_creates_data_dir() {
        let (temp_dir, _store) = create_test_store();
        assert!(temp_dir.path().join("data").exists());
    }

    #[test]
    fn test_save_and_load() {
        let (temp_dir, store) = create_test_store();
        assert_eq!(store.load(StoreName::Stats).unwrap(), None);
        assert_eq!(store.status(StoreName::Stats), StoreStatus::Missing);

        let doc = json!({"carsServed": 3});
        store.save(StoreName::Stats, &doc).unwrap();

        assert!(temp_dir.path().join("data").join("stats.json").exists());
        assert_eq!(store.load(StoreName::Stats).unwrap(), Some(doc));
        assert_eq!(store.status(StoreName::Stats), StoreStatus::Valid);
    }

    #[test]
    fn test_save_leaves_no_staged_file() {
        let (temp_dir, store) = create_test_store();
        store.save(StoreName::Tanks, &json!([])).unwrap();

        assert!(temp_dir.path().join("data").join("tanks.json").exists());
        assert!(!temp_dir.path().join("data").join("tanks.json.tmp").exists());
    }

    #[test]
    fn test_save_overwrites_whole_document() {
        let (_temp_dir, store) = create_test_store();
        store.save(StoreName::History, &json!([1, 2, 3])).unwrap();
        store.save(StoreName::History, &json!([4])).unwrap();
        assert_eq!(store.load(StoreName::History).unwrap(), Some(json!([4])));
    }

    #[test]
    fn test_snapshot_is_pretty_printed() {
        let (_temp_dir, store) = create_test_store();
        store.save(StoreName::Stats, &json!({"carsServed": 1})).unwrap();

        let text = fs::read_to_string(store.paths().store_file(StoreName::Stats)).unwrap();
        assert!(text.contains("\n  \"carsServed\": 1"));
    }

    #[test]
    fn test_corrupt_file() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.paths().store_file(StoreName::Tanks), "[{").unwrap();

        assert_eq!(store.status(StoreName::Tanks), StoreStatus::Corrupt);
        let err = store.load(StoreName::Tanks).unwrap_err();
        assert!(err.is_persistence());
        assert!(err.to_string().contains("tanks store"));
    }

    #[test]
    fn test_save_fails_when_data_dir_removed() {
        let (temp_dir, store) = create_test_store();
        fs::remove_dir_all(temp_dir.path().join("data")).unwrap();

        let err = store.save(StoreName::Stats, &json!({})).unwrap_err();
        assert!(err.is_persistence());
    }
}
