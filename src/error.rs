//! Custom error types for the fuel station
//!
//! Every fallible station operation returns a [`StationError`]. Each error
//! belongs to exactly one [`ErrorKind`], which is what the operator shell
//! and the tests match on.

use thiserror::Error;

use crate::models::{ColumnId, FuelType, TankId, Volume};

/// Category of a station error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmergencyActive,
    InvalidColumn,
    FuelUnavailable,
    TankDisabled,
    InsufficientFuel,
    InvalidAmount,
    CapacityExceeded,
    BelowMinimum,
    FuelTypeMismatch,
    NotFound,
    PersistenceFailure,
}

/// The main error type for station operations
#[derive(Error, Debug)]
pub enum StationError {
    /// Sales are halted
    #[error("Emergency mode is active: fuelling is blocked")]
    EmergencyActive,

    /// Column number does not exist
    #[error("Column not found: {0}")]
    InvalidColumn(ColumnId),

    /// Column exists but does not dispense this grade
    #[error("{fuel} is not offered at column {column}")]
    FuelUnavailable { column: ColumnId, fuel: FuelType },

    /// Routed tank is switched off
    #[error("Tank {0} is disabled")]
    TankDisabled(TankId),

    /// Not enough fuel in the tank
    #[error("Insufficient fuel in tank {tank}: need {requested} L, have {available} L")]
    InsufficientFuel {
        tank: TankId,
        requested: Volume,
        available: Volume,
    },

    /// Quantity is zero, negative or otherwise unusable
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The operation would overfill a tank
    #[error("Tank {tank} capacity exceeded: {requested} L requested, {free} L free")]
    CapacityExceeded {
        tank: TankId,
        requested: Volume,
        free: Volume,
    },

    /// Tank cannot be enabled while below its minimum level
    #[error("Tank {tank} is below its minimum level: {current} L < {minimum} L")]
    BelowMinimum {
        tank: TankId,
        current: Volume,
        minimum: Volume,
    },

    /// Transfer between tanks of different grades
    #[error("Fuel type mismatch: tank {from} holds {from_fuel}, tank {to} holds {to_fuel}")]
    FuelTypeMismatch {
        from: TankId,
        from_fuel: FuelType,
        to: TankId,
        to_fuel: FuelType,
    },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Snapshot store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl StationError {
    /// Create a "not found" error for tanks
    pub fn tank_not_found(id: TankId) -> Self {
        Self::NotFound {
            entity_type: "Tank",
            identifier: id.to_string(),
        }
    }

    /// The category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmergencyActive => ErrorKind::EmergencyActive,
            Self::InvalidColumn(_) => ErrorKind::InvalidColumn,
            Self::FuelUnavailable { .. } => ErrorKind::FuelUnavailable,
            Self::TankDisabled(_) => ErrorKind::TankDisabled,
            Self::InsufficientFuel { .. } => ErrorKind::InsufficientFuel,
            Self::InvalidAmount(_) => ErrorKind::InvalidAmount,
            Self::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            Self::BelowMinimum { .. } => ErrorKind::BelowMinimum,
            Self::FuelTypeMismatch { .. } => ErrorKind::FuelTypeMismatch,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Storage(_) | Self::Config(_) | Self::Io(_) | Self::Json(_) => {
                ErrorKind::PersistenceFailure
            }
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the error happened after state was already committed in memory
    pub fn is_persistence(&self) -> bool {
        self.kind() == ErrorKind::PersistenceFailure
    }
}

impl From<std::io::Error> for StationError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for station operations
pub type StationResult<T> = Result<T, StationError>;
