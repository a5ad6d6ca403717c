//! Emergency CLI commands

use clap::Subcommand;

use crate::display::format_emergency;
use crate::error::StationResult;
use crate::services::TransactionEngine;
use crate::storage::Persistence;

/// Emergency subcommands
#[derive(Subcommand, Debug)]
pub enum EmergencyCommands {
    /// Halt all sales and disable every tank
    On {
        /// Confirm the halt
        #[arg(short, long)]
        yes: bool,
    },
    /// Lift the halt; tanks stay disabled
    Off {
        /// Confirm lifting the halt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show whether the station is halted
    Status,
}

/// Handle an emergency command
pub fn handle_emergency_command<P: Persistence>(
    engine: &mut TransactionEngine<P>,
    cmd: EmergencyCommands,
) -> StationResult<()> {
    let (confirmed, state) = match cmd {
        EmergencyCommands::On { yes } => (yes, engine.activate_emergency(yes)?),
        EmergencyCommands::Off { yes } => (yes, engine.clear_emergency(yes)?),
        EmergencyCommands::Status => {
            println!("Station mode: {}", engine.emergency_state());
            return Ok(());
        }
    };

    if !confirmed {
        println!("Station mode: {}", state);
        println!("Nothing changed. Re-run with --yes to confirm.");
        return Ok(());
    }

    print!("{}", format_emergency(state));
    Ok(())
}
