//! Tank CLI commands
//!
//! Refills, transfers and enabling or disabling individual tanks.

use clap::Subcommand;
use tracing::warn;

use crate::display::{format_refill, format_tank_details, format_tank_switch, format_transfer};
use crate::error::StationResult;
use crate::models::{TankId, Volume};
use crate::services::{TankAction, TransactionEngine};
use crate::storage::Persistence;

/// Tank subcommands
#[derive(Subcommand, Debug)]
pub enum TankCommands {
    /// Show one tank in detail
    Show {
        /// Tank number (e.g. 2 or #2)
        tank: TankId,
    },
    /// Put a tank back into service
    Enable {
        /// Tank number
        tank: TankId,
    },
    /// Take a tank out of service
    Disable {
        /// Tank number
        tank: TankId,
    },
}

/// Handle a tank command
pub fn handle_tank_command<P: Persistence>(
    engine: &mut TransactionEngine<P>,
    cmd: TankCommands,
) -> StationResult<()> {
    let (tank, action) = match cmd {
        TankCommands::Show { tank } => {
            let found = engine.tanks().get(tank)?;
            print!("{}", format_tank_details(found, engine.columns()));
            return Ok(());
        }
        TankCommands::Enable { tank } => (tank, TankAction::Enable),
        TankCommands::Disable { tank } => (tank, TankAction::Disable),
    };

    let updated = engine.manage_tank(tank, action).map_err(|e| {
        warn!(tank = %tank, ?action, error = %e, "Tank switch rejected");
        e
    })?;
    print!("{}", format_tank_switch(&updated));
    Ok(())
}

/// Handle `station refill`
pub fn handle_refill_command<P: Persistence>(
    engine: &mut TransactionEngine<P>,
    tank: TankId,
    liters: Volume,
) -> StationResult<()> {
    let updated = engine.refill(tank, liters).map_err(|e| {
        warn!(tank = %tank, liters = %liters, error = %e, "Refill rejected");
        e
    })?;
    print!("{}", format_refill(&updated));
    Ok(())
}

/// Handle `station transfer`
pub fn handle_transfer_command<P: Persistence>(
    engine: &mut TransactionEngine<P>,
    from: TankId,
    to: TankId,
    liters: Volume,
) -> StationResult<()> {
    let receipt = engine.transfer_fuel(from, to, liters).map_err(|e| {
        warn!(from = %from, to = %to, liters = %liters, error = %e, "Transfer rejected");
        e
    })?;
    print!("{}", format_transfer(&receipt));
    Ok(())
}
