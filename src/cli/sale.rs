//! Sale CLI command
//!
//! Without `--yes` the sale is only priced; the operator re-runs the
//! command with `--yes` once the customer has paid.

use tracing::warn;

use crate::config::Settings;
use crate::display::{format_quote, format_receipt};
use crate::error::StationResult;
use crate::models::{ColumnId, FuelType, Volume};
use crate::services::{SaleOutcome, TransactionEngine};
use crate::storage::Persistence;

/// Arguments of `station sell`
#[derive(clap::Args, Debug)]
pub struct SellArgs {
    /// Column number (e.g. 3 or C3)
    pub column: ColumnId,
    /// Fuel grade (АИ-92, АИ-95, АИ-98, ДТ; also 92, 95, 98, dt)
    pub fuel: FuelType,
    /// Quantity in liters (e.g. 40 or 40.5)
    pub liters: Volume,
    /// Confirm payment and dispense
    #[arg(short, long)]
    pub yes: bool,
}

/// Handle `station sell`
pub fn handle_sell_command<P: Persistence>(
    engine: &mut TransactionEngine<P>,
    settings: &Settings,
    args: SellArgs,
) -> StationResult<()> {
    let outcome = engine
        .service_client(args.column, args.fuel, args.liters, args.yes)
        .map_err(|e| {
            warn!(column = %args.column, fuel = %args.fuel, error = %e, "Sale rejected");
            e
        })?;

    match outcome {
        SaleOutcome::Quoted(quote) => {
            print!("{}", format_quote(&quote, &settings.currency_symbol));
            println!();
            println!("Not charged. Re-run with --yes to confirm payment.");
        }
        SaleOutcome::Completed(receipt) => {
            print!("{}", format_receipt(&receipt, &settings.currency_symbol));
        }
    }

    Ok(())
}
