//! Core data models for the fuel station
//!
//! Tanks, dispenser columns, the sales ledger and the value types they are
//! measured in.

pub mod column;
pub mod fuel;
pub mod ids;
pub mod money;
pub mod stats;
pub mod tank;
pub mod volume;

pub use column::Column;
pub use fuel::{FuelParseError, FuelType};
pub use ids::{ColumnId, TankId};
pub use money::Money;
pub use stats::{FuelLedger, Stats};
pub use tank::{Tank, TankValidationError};
pub use volume::{Volume, VolumeParseError};
