//! History entry data structures
//!
//! Defines the event categories recorded in the station history and the
//! entry format itself.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of events that are recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A customer was served
    Sale,
    /// A tank was topped up from a delivery
    Refill,
    /// Fuel was pumped between two tanks
    Transfer,
    /// Operator enabled a tank
    TankEnabled,
    /// Operator disabled a tank
    TankDisabled,
    /// Tank dropped below its minimum and was switched off
    AutoDisabled,
    /// Emergency halt engaged
    EmergencyActivated,
    /// Emergency halt lifted
    EmergencyCleared,
    /// Entries written before kinds were recorded
    #[serde(other)]
    Other,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Sale => write!(f, "SALE"),
            EventKind::Refill => write!(f, "REFILL"),
            EventKind::Transfer => write!(f, "TRANSFER"),
            EventKind::TankEnabled => write!(f, "ENABLE"),
            EventKind::TankDisabled => write!(f, "DISABLE"),
            EventKind::AutoDisabled => write!(f, "AUTO-OFF"),
            EventKind::EmergencyActivated => write!(f, "EMERGENCY"),
            EventKind::EmergencyCleared => write!(f, "ALL-CLEAR"),
            EventKind::Other => write!(f, "EVENT"),
        }
    }
}

/// A single history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Category of the event
    #[serde(default = "default_kind")]
    pub kind: EventKind,

    /// Human-readable description
    pub description: String,
}

fn default_kind() -> EventKind {
    EventKind::Other
}

impl HistoryEntry {
    /// Create an entry stamped with the current time
    pub fn new(kind: EventKind, description: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            description: description.into(),
        }
    }

    /// Format the timestamp in local time for display
    pub fn local_time(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}
