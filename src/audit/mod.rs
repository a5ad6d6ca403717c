//! Station history (audit trail)
//!
//! Records every committed operation in an append-only log.
//!
//! # Architecture
//!
//! - `HistoryEntry`: a single timestamped event with its `EventKind` and a
//!   human-readable description.
//! - `AuditLog`: the in-memory, append-only sequence of entries. The storage
//!   layer persists it as the `history` snapshot after every mutation.
//!
//! # Example
//!
//! ```rust
//! use fuel_station::audit::{AuditLog, EventKind};
//!
//! let mut log = AuditLog::new();
//! log.append(EventKind::Refill, "Refill: АИ-92 #1 +500 L");
//! assert_eq!(log.recent(20).len(), 1);
//! ```

mod entry;
mod log;

pub use entry::{EventKind, HistoryEntry};
pub use log::AuditLog;
