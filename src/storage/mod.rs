//! Storage layer for the fuel station
//!
//! State lives in four independent snapshot stores (`tanks`, `columns`,
//! `stats`, `history`). Each store holds one JSON document that is
//! overwritten wholesale on every save; there are no partial writes.
//!
//! The [`Persistence`] trait is the seam between the station core and the
//! backing medium. [`JsonFileStore`] writes one pretty-printed file per store;
//! [`MemoryStore`] keeps documents in memory for tests.

pub mod init;
pub mod json_store;
pub mod memory;

pub use init::{default_columns, default_stats, default_tanks, initialize_storage};
pub use json_store::{JsonFileStore, StoreStatus};
pub use memory::MemoryStore;

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{StationError, StationResult};

/// Names of the snapshot stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StoreName {
    Tanks,
    Columns,
    Stats,
    History,
}

impl StoreName {
    /// All stores, in load order
    pub const ALL: [StoreName; 4] = [Self::Tanks, Self::Columns, Self::Stats, Self::History];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tanks => "tanks",
            Self::Columns => "columns",
            Self::Stats => "stats",
            Self::History => "history",
        }
    }
}

impl fmt::Display for StoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backing medium for the snapshot stores
pub trait Persistence {
    /// Read a store's document; `None` if the store does not exist yet
    fn load(&self, store: StoreName) -> StationResult<Option<Value>>;

    /// Overwrite a store's document
    fn save(&self, store: StoreName, document: &Value) -> StationResult<()>;
}

/// Load a typed document, creating the store with `default` if absent
pub fn load_or_init<T, P, F>(persistence: &P, store: StoreName, default: F) -> StationResult<T>
where
    T: Serialize + DeserializeOwned,
    P: Persistence + ?Sized,
    F: FnOnce() -> T,
{
    match persistence.load(store)? {
        Some(document) => serde_json::from_value(document).map_err(|e| {
            StationError::Storage(format!("Failed to parse {} store: {}", store, e))
        }),
        None => {
            debug!(store = %store, "Store missing, writing defaults");
            let value = default();
            save_document(persistence, store, &value)?;
            Ok(value)
        }
    }
}

/// Serialize and overwrite a store's document
pub fn save_document<T, P>(persistence: &P, store: StoreName, document: &T) -> StationResult<()>
where
    T: Serialize + ?Sized,
    P: Persistence + ?Sized,
{
    let value = serde_json::to_value(document).map_err(|e| {
        StationError::Storage(format!("Failed to serialize {} store: {}", store, e))
    })?;
    persistence.save(store, &value)
}
