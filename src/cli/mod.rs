//! CLI command handlers
//!
//! This module contains the implementation of the one-shot commands,
//! bridging the clap argument parsing with the transaction engine.

pub mod emergency;
pub mod report;
pub mod sale;
pub mod tank;

pub use emergency::{handle_emergency_command, EmergencyCommands};
pub use report::{
    handle_columns_command, handle_history_command, handle_stats_command, handle_tanks_command,
};
pub use sale::{handle_sell_command, SellArgs};
pub use tank::{handle_refill_command, handle_tank_command, handle_transfer_command, TankCommands};
