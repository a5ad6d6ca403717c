//! Tank model
//!
//! A tank is a bounded reservoir holding exactly one fuel grade.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::fuel::FuelType;
use super::ids::TankId;
use super::volume::Volume;

/// A fuel tank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tank {
    /// Station number of the tank
    pub id: TankId,

    /// Grade stored in the tank
    pub fuel_type: FuelType,

    /// Physical capacity
    pub capacity_max: Volume,

    /// Volume currently in the tank
    pub current_volume: Volume,

    /// Level below which the tank may not dispense
    pub min_threshold: Volume,

    /// Whether the tank may serve sales
    pub enabled: bool,
}

impl Tank {
    /// Create a new, enabled tank
    pub fn new(
        id: TankId,
        fuel_type: FuelType,
        capacity_max: Volume,
        current_volume: Volume,
        min_threshold: Volume,
    ) -> Self {
        Self {
            id,
            fuel_type,
            capacity_max,
            current_volume,
            min_threshold,
            enabled: true,
        }
    }

    /// Room left before the tank is full
    pub fn free_capacity(&self) -> Volume {
        Volume::from_milliliters(
            self.capacity_max.milliliters() - self.current_volume.milliliters(),
        )
    }

    /// Whether the tank sits below its minimum threshold
    pub fn is_below_minimum(&self) -> bool {
        self.current_volume < self.min_threshold
    }

    /// Whether the tank is enabled while below its minimum (auto-disable candidate)
    pub fn needs_auto_disable(&self) -> bool {
        self.enabled && self.is_below_minimum()
    }

    /// Fill level as a whole percentage of capacity
    pub fn fill_percent(&self) -> u8 {
        let cap = self.capacity_max.milliliters();
        if cap <= 0 {
            return 0;
        }
        let pct = self.current_volume.milliliters().clamp(0, cap) * 100 / cap;
        pct as u8
    }

    /// Validate the tank's physical invariants
    pub fn validate(&self) -> Result<(), TankValidationError> {
        if !self.capacity_max.is_positive() {
            return Err(TankValidationError::NonPositiveCapacity);
        }
        if self.current_volume.is_negative() {
            return Err(TankValidationError::NegativeVolume);
        }
        if self.current_volume > self.capacity_max {
            return Err(TankValidationError::OverCapacity);
        }
        if self.min_threshold.is_negative() || self.min_threshold > self.capacity_max {
            return Err(TankValidationError::ThresholdOutOfRange);
        }
        Ok(())
    }
}

impl fmt::Display for Tank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.fuel_type, self.id)
    }
}

/// Validation errors for tanks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TankValidationError {
    NonPositiveCapacity,
    NegativeVolume,
    OverCapacity,
    ThresholdOutOfRange,
}

impl fmt::Display for TankValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveCapacity => write!(f, "Tank capacity must be positive"),
            Self::NegativeVolume => write!(f, "Tank volume cannot be negative"),
            Self::OverCapacity => write!(f, "Tank volume exceeds its capacity"),
            Self::ThresholdOutOfRange => {
                write!(f, "Minimum threshold must lie between zero and capacity")
            }
        }
    }
}

impl std::error::Error for TankValidationError {}
