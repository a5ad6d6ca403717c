//! Tank display formatting
//!
//! Formats tanks for terminal output as a table and a detail card.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Tank;
use crate::services::ColumnRouting;

#[derive(Tabled)]
struct TankRow {
    #[tabled(rename = "Tank")]
    id: String,
    #[tabled(rename = "Fuel")]
    fuel: String,
    #[tabled(rename = "Level, L")]
    level: String,
    #[tabled(rename = "Capacity, L")]
    capacity: String,
    #[tabled(rename = "Min, L")]
    minimum: String,
    #[tabled(rename = "Fill")]
    fill: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn status_label(tank: &Tank) -> &'static str {
    match (tank.enabled, tank.is_below_minimum()) {
        (true, _) => "enabled",
        (false, true) => "disabled (low)",
        (false, false) => "disabled",
    }
}

/// Format all tanks as a table
pub fn format_tank_list(tanks: &[Tank]) -> String {
    if tanks.is_empty() {
        return "No tanks configured.\n".to_string();
    }

    let rows = tanks.iter().map(|tank| TankRow {
        id: tank.id.to_string(),
        fuel: tank.fuel_type.to_string(),
        level: tank.current_volume.to_string(),
        capacity: tank.capacity_max.to_string(),
        minimum: tank.min_threshold.to_string(),
        fill: format!("{}%", tank.fill_percent()),
        status: status_label(tank).to_string(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(2..6)).with(Alignment::right()));
    format!("{}\n", table)
}

/// Format one tank with the columns that draw from it
pub fn format_tank_details(tank: &Tank, routing: &ColumnRouting) -> String {
    let mut output = String::new();

    output.push_str(&format!("Tank {}\n", tank));
    output.push_str(&format!("  Fuel:       {}\n", tank.fuel_type));
    output.push_str(&format!(
        "  Level:      {} / {} L ({}%)\n",
        tank.current_volume,
        tank.capacity_max,
        tank.fill_percent()
    ));
    output.push_str(&format!("  Free:       {} L\n", tank.free_capacity()));
    output.push_str(&format!("  Minimum:    {} L\n", tank.min_threshold));
    output.push_str(&format!("  Status:     {}\n", status_label(tank)));

    let columns: Vec<String> = routing
        .columns_using(tank.id)
        .iter()
        .map(|c| c.to_string())
        .collect();
    if columns.is_empty() {
        output.push_str("  Columns:    (none)\n");
    } else {
        output.push_str(&format!("  Columns:    {}\n", columns.join(", ")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{default_columns, default_tanks};

    #[test]
    fn test_format_tank_list() {
        let output = format_tank_list(&default_tanks());
        assert!(output.contains("Level, L"));
        assert!(output.contains("АИ-98"));
        assert!(output.contains("12400"));
        assert!(output.contains("disabled (low)"));
        assert!(output.contains("62%"));
    }

    #[test]
    fn test_format_empty_tank_list() {
        assert_eq!(format_tank_list(&[]), "No tanks configured.\n");
    }

    #[test]
    fn test_format_tank_details() {
        let routing = ColumnRouting::new(default_columns()).unwrap();
        let tanks = default_tanks();
        let output = format_tank_details(&tanks[4], &routing);

        assert!(output.contains("Tank ДТ #5"));
        assert!(output.contains("15600 / 25000 L"));
        assert!(output.contains("C3, C5, C6, C7, C8"));
    }
}
