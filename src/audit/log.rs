//! Append-only station history
//!
//! The log is held in memory and persisted as one snapshot document by the
//! storage layer. Entries are never edited or removed.

use serde::{Deserialize, Serialize};

use super::entry::{EventKind, HistoryEntry};

/// Ordered, append-only sequence of history entries (oldest first)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditLog {
    entries: Vec<HistoryEntry>,
}

impl AuditLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a timestamped entry and return it
    pub fn append(&mut self, kind: EventKind, description: impl Into<String>) -> &HistoryEntry {
        self.entries.push(HistoryEntry::new(kind, description));
        &self.entries[self.entries.len() - 1]
    }

    /// The most recent `count` entries, oldest first (most recent last)
    pub fn recent(&self, count: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    /// All entries in chronological order
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries in the log
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of a given kind, oldest first
    pub fn of_kind(&self, kind: EventKind) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }
}
