//! Read-only CLI commands: tanks, columns, statistics and history

use crate::config::Settings;
use crate::display::{format_column_list, format_history, format_stats, format_tank_list};
use crate::services::TransactionEngine;
use crate::storage::Persistence;

pub fn handle_tanks_command<P: Persistence>(engine: &TransactionEngine<P>) {
    print!("{}", format_tank_list(engine.tanks().list()));
}

pub fn handle_columns_command<P: Persistence>(engine: &TransactionEngine<P>) {
    print!(
        "{}",
        format_column_list(engine.columns().list(), engine.tanks())
    );
}

pub fn handle_stats_command<P: Persistence>(engine: &TransactionEngine<P>, settings: &Settings) {
    print!("{}", format_stats(&engine.stats(), &settings.currency_symbol));
}

/// Print the most recent history entries; `limit` overrides the setting
pub fn handle_history_command<P: Persistence>(
    engine: &TransactionEngine<P>,
    settings: &Settings,
    limit: Option<usize>,
) {
    let limit = limit.unwrap_or(settings.history_display_limit);
    print!("{}", format_history(engine.recent_history(limit)));
}
