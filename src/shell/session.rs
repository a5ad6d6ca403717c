//! Interactive operator session
//!
//! Collects parameters line by line and hands them to the transaction
//! engine. Operation errors are shown to the operator and the loop carries
//! on; only failures of the terminal itself end the session early.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::Settings;
use crate::display::{
    format_column_list, format_column_offerings, format_emergency, format_history, format_quote,
    format_receipt, format_refill, format_stats, format_tank_list, format_tank_switch,
    format_transfer,
};
use crate::error::{StationError, StationResult};
use crate::models::{ColumnId, FuelType, TankId, Volume};
use crate::services::{EmergencyState, SaleOutcome, TankAction, TransactionEngine};
use crate::storage::Persistence;

use super::command::MenuCommand;

enum Flow {
    Continue,
    Exit,
}

/// Menu-driven operator console over any line-oriented input and output
pub struct OperatorShell<'a, P: Persistence, R: BufRead, W: Write> {
    engine: &'a mut TransactionEngine<P>,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, P: Persistence, R: BufRead, W: Write> OperatorShell<'a, P, R, W> {
    pub fn new(
        engine: &'a mut TransactionEngine<P>,
        settings: &'a Settings,
        input: R,
        output: W,
    ) -> Self {
        Self {
            engine,
            settings,
            input,
            output,
        }
    }

    /// Run the menu loop until Exit or end of input
    ///
    /// Both ways out save every store.
    pub fn run(&mut self) -> StationResult<()> {
        loop {
            if let Err(e) = self.engine.apply_auto_disable() {
                self.report(&e)?;
            }
            self.print_menu()?;

            let Some(choice) = self.prompt("> ")? else {
                debug!("End of input, leaving the shell");
                self.dispatch(MenuCommand::Exit)?;
                return Ok(());
            };

            let Some(command) = MenuCommand::from_key(&choice) else {
                writeln!(self.output, "Unknown option '{}'.", choice)?;
                continue;
            };

            if let Flow::Exit = self.dispatch(command)? {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, command: MenuCommand) -> StationResult<Flow> {
        debug!(?command, "Menu command");
        match command {
            MenuCommand::ServiceClient => self.service_client()?,
            MenuCommand::ShowTanks => {
                write!(self.output, "{}", format_tank_list(self.engine.tanks().list()))?
            }
            MenuCommand::Refill => self.refill()?,
            MenuCommand::ShowStats => write!(
                self.output,
                "{}",
                format_stats(&self.engine.stats(), &self.settings.currency_symbol)
            )?,
            MenuCommand::ShowHistory => write!(
                self.output,
                "{}",
                format_history(
                    self.engine
                        .recent_history(self.settings.history_display_limit)
                )
            )?,
            MenuCommand::Transfer => self.transfer()?,
            MenuCommand::ManageTanks => self.manage_tanks()?,
            MenuCommand::ShowColumns => write!(
                self.output,
                "{}",
                format_column_list(self.engine.columns().list(), self.engine.tanks())
            )?,
            MenuCommand::Emergency => self.emergency()?,
            MenuCommand::Exit => {
                match self.engine.shutdown() {
                    Ok(()) => writeln!(self.output, "State saved. Goodbye.")?,
                    Err(e) => self.report(&e)?,
                }
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> StationResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "=".repeat(40))?;
        writeln!(self.output, "{}", self.settings.station_name)?;
        writeln!(self.output, "Fuel station control")?;
        writeln!(self.output, "{}", "=".repeat(40))?;
        if self.engine.emergency_state().is_active() {
            writeln!(self.output, "!!! EMERGENCY MODE !!!")?;
        }
        for command in MenuCommand::ALL {
            writeln!(self.output, "{}", command)?;
        }
        Ok(())
    }

    fn service_client(&mut self) -> StationResult<()> {
        if self.engine.emergency_state().is_active() {
            return self.report(&StationError::EmergencyActive);
        }

        write!(
            self.output,
            "{}",
            format_column_list(self.engine.columns().list(), self.engine.tanks())
        )?;
        let Some(column) = self.prompt_parsed::<ColumnId>("Column: ")? else {
            return Ok(());
        };
        let offerings = match self.engine.columns().get(column) {
            Ok(found) => {
                let text = format_column_offerings(
                    found,
                    self.engine.tanks(),
                    &self.settings.currency_symbol,
                );
                let fuels: Vec<FuelType> = found.offerings.keys().copied().collect();
                write!(self.output, "{}", text)?;
                fuels
            }
            Err(e) => return self.report(&e),
        };

        let Some(answer) = self.prompt("Fuel (number or grade): ")? else {
            return Ok(());
        };
        let Some(fuel) = pick_fuel(&answer, &offerings) else {
            writeln!(self.output, "Invalid input '{}'.", answer)?;
            return Ok(());
        };
        let Some(liters) = self.prompt_parsed::<Volume>("Liters: ")? else {
            return Ok(());
        };

        let quote = match self.engine.service_client(column, fuel, liters, false) {
            Ok(SaleOutcome::Quoted(quote)) => quote,
            Ok(SaleOutcome::Completed(_)) => return Ok(()),
            Err(e) => return self.report(&e),
        };
        write!(
            self.output,
            "{}",
            format_quote(&quote, &self.settings.currency_symbol)
        )?;

        if !self.confirm("Confirm payment? (y/n): ")? {
            writeln!(self.output, "Sale cancelled.")?;
            return Ok(());
        }

        match self.engine.service_client(column, fuel, liters, true) {
            Ok(SaleOutcome::Completed(receipt)) => write!(
                self.output,
                "{}",
                format_receipt(&receipt, &self.settings.currency_symbol)
            )?,
            Ok(SaleOutcome::Quoted(_)) => {}
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn refill(&mut self) -> StationResult<()> {
        write!(self.output, "{}", format_tank_list(self.engine.tanks().list()))?;
        let Some(tank) = self.prompt_parsed::<TankId>("Tank: ")? else {
            return Ok(());
        };
        let Some(liters) = self.prompt_parsed::<Volume>("Liters: ")? else {
            return Ok(());
        };

        match self.engine.refill(tank, liters) {
            Ok(updated) => write!(self.output, "{}", format_refill(&updated))?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn transfer(&mut self) -> StationResult<()> {
        write!(self.output, "{}", format_tank_list(self.engine.tanks().list()))?;
        let Some(from) = self.prompt_parsed::<TankId>("From tank: ")? else {
            return Ok(());
        };
        let Some(to) = self.prompt_parsed::<TankId>("To tank: ")? else {
            return Ok(());
        };
        let Some(liters) = self.prompt_parsed::<Volume>("Liters: ")? else {
            return Ok(());
        };

        match self.engine.transfer_fuel(from, to, liters) {
            Ok(receipt) => write!(self.output, "{}", format_transfer(&receipt))?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn manage_tanks(&mut self) -> StationResult<()> {
        writeln!(self.output, "1) Enable")?;
        writeln!(self.output, "2) Disable")?;
        let Some(choice) = self.prompt("> ")? else {
            return Ok(());
        };
        let action = match choice.as_str() {
            "1" => TankAction::Enable,
            "2" => TankAction::Disable,
            _ => {
                writeln!(self.output, "Invalid input '{}'.", choice)?;
                return Ok(());
            }
        };

        write!(self.output, "{}", format_tank_list(self.engine.tanks().list()))?;
        let Some(tank) = self.prompt_parsed::<TankId>("Tank: ")? else {
            return Ok(());
        };

        match self.engine.manage_tank(tank, action) {
            Ok(updated) => write!(self.output, "{}", format_tank_switch(&updated))?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn emergency(&mut self) -> StationResult<()> {
        let question = match self.engine.emergency_state() {
            EmergencyState::Normal => "Confirm emergency halt? (y/n): ",
            EmergencyState::Emergency => "Leave emergency mode? (y/n): ",
        };
        let confirmed = self.confirm(question)?;

        match self.engine.toggle_emergency(confirmed) {
            Ok(state) if confirmed => write!(self.output, "{}", format_emergency(state))?,
            Ok(_) => writeln!(self.output, "Cancelled.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    /// Show a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> StationResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for a value; unparsable input is reported and yields `None`
    fn prompt_parsed<T: std::str::FromStr>(&mut self, text: &str) -> StationResult<Option<T>> {
        let Some(answer) = self.prompt(text)? else {
            return Ok(None);
        };
        match answer.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "Invalid input '{}'.", answer)?;
                Ok(None)
            }
        }
    }

    fn confirm(&mut self, text: &str) -> StationResult<bool> {
        Ok(self
            .prompt(text)?
            .map(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false))
    }

    fn report(&mut self, error: &StationError) -> StationResult<()> {
        warn!(kind = ?error.kind(), error = %error, "Operation rejected");
        writeln!(self.output, "Error: {}", error)?;
        Ok(())
    }
}

/// Resolve a fuel answer: a menu number for the column's offerings, else a grade name
fn pick_fuel(answer: &str, offerings: &[FuelType]) -> Option<FuelType> {
    if let Ok(index) = answer.parse::<usize>() {
        if (1..=offerings.len()).contains(&index) {
            return Some(offerings[index - 1]);
        }
    }
    FuelType::parse(answer)
}
