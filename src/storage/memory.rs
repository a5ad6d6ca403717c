//! In-memory snapshot stores
//!
//! Holds documents in a map instead of on disk. Used by the test suites.

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::StationResult;

use super::{Persistence, StoreName};

/// Snapshot stores kept in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RefCell<BTreeMap<StoreName, Value>>,
    saves: RefCell<BTreeMap<StoreName, usize>>,
}

impl MemoryStore {
    /// Creates a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Current document of a store, if any
    pub fn document(&self, store: StoreName) -> Option<Value> {
        self.documents.borrow().get(&store).cloned()
    }

    /// How many times a store has been written
    pub fn save_count(&self, store: StoreName) -> usize {
        self.saves.borrow().get(&store).copied().unwrap_or(0)
    }
}

impl Persistence for MemoryStore {
    fn load(&self, store: StoreName) -> StationResult<Option<Value>> {
        Ok(self.document(store))
    }

    fn save(&self, store: StoreName, document: &Value) -> StationResult<()> {
        self.documents.borrow_mut().insert(store, document.clone());
        *self.saves.borrow_mut().entry(store).or_insert(0) += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_in_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.load(StoreName::Columns).unwrap(), None);

        store.save(StoreName::Columns, &json!([])).unwrap();
        store.save(StoreName::Columns, &json!([{"id": 1}])).unwrap();

        assert_eq!(store.load(StoreName::Columns).unwrap(), Some(json!([{"id": 1}])));
        assert_eq!(store.save_count(StoreName::Columns), 2);
        assert_eq!(store.save_count(StoreName::Tanks), 0);
    }
}
