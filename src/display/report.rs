//! Statistics and history display formatting

use crate::audit::HistoryEntry;
use crate::services::StatsAggregator;

/// Format the sales summary with one line per fuel grade
pub fn format_stats(stats: &StatsAggregator<'_>, currency: &str) -> String {
    let mut output = String::new();

    output.push_str("Station statistics\n");
    output.push_str(&"=".repeat(44));
    output.push('\n');
    output.push_str(&format!("Cars served:    {}\n", stats.cars_served()));
    output.push_str(&format!(
        "Total income:   {}\n",
        stats.total_income().format_with_symbol(currency)
    ));
    if let Some(average) = stats.average_sale() {
        output.push_str(&format!(
            "Average sale:   {}\n",
            average.format_with_symbol(currency)
        ));
    }
    output.push_str(&format!("Liters sold:    {} L\n", stats.total_liters_sold()));
    if stats.emergency_active() {
        output.push_str("Mode:           EMERGENCY (sales halted)\n");
    }

    output.push('\n');
    output.push_str(&format!("{:<8} {:>12} {:>18}\n", "Fuel", "Liters", "Income"));
    output.push_str(&"-".repeat(40));
    output.push('\n');
    for (fuel, ledger) in stats.per_fuel() {
        output.push_str(&format!(
            "{:<8} {:>12} {:>18}\n",
            fuel.name(),
            ledger.liters_sold.to_string(),
            ledger.money_earned.format_with_symbol(currency)
        ));
    }

    output
}

/// Format history entries, oldest first
pub fn format_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {:<9}  {}\n",
            entry.local_time(),
            entry.kind.to_string(),
            entry.description
        ));
    }
    output
}
