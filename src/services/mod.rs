//! Business logic layer for the fuel station
//!
//! The [`TransactionEngine`] owns the [`StationState`] and is the only path
//! through which tanks, statistics and history change. The registry, routing,
//! emergency and statistics components are borrowed by the engine for the
//! duration of a single operation.

pub mod emergency;
pub mod routing;
pub mod state;
pub mod stats;
pub mod tanks;
pub mod transaction;

pub use emergency::{EmergencyController, EmergencyState};
pub use routing::ColumnRouting;
pub use state::StationState;
pub use stats::StatsAggregator;
pub use tanks::TankRegistry;
pub use transaction::{
    SaleOutcome, SaleQuote, SaleReceipt, TankAction, TransactionEngine, TransferReceipt,
};
