//! Column display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Column, FuelType};
use crate::services::TankRegistry;

#[derive(Tabled)]
struct ColumnRow {
    #[tabled(rename = "Column")]
    id: String,
    #[tabled(rename = "АИ-92")]
    ai92: String,
    #[tabled(rename = "АИ-95")]
    ai95: String,
    #[tabled(rename = "АИ-98")]
    ai98: String,
    #[tabled(rename = "ДТ")]
    diesel: String,
}

/// Format the routing table: one row per column, one cell per grade
///
/// A cell names the source tank, marked `(off)` when that tank is disabled.
pub fn format_column_list(columns: &[Column], tanks: &TankRegistry) -> String {
    if columns.is_empty() {
        return "No columns configured.\n".to_string();
    }

    let cell = |column: &Column, fuel: FuelType| match column.tank_for(fuel) {
        None => "-".to_string(),
        Some(id) => match tanks.get(id) {
            Ok(tank) if tank.enabled => id.to_string(),
            Ok(_) => format!("{} (off)", id),
            Err(_) => format!("{} (missing)", id),
        },
    };

    let rows = columns.iter().map(|column| ColumnRow {
        id: column.id.to_string(),
        ai92: cell(column, FuelType::Ai92),
        ai95: cell(column, FuelType::Ai95),
        ai98: cell(column, FuelType::Ai98),
        diesel: cell(column, FuelType::Diesel),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format the grades offered at one column, numbered for selection
pub fn format_column_offerings(column: &Column, tanks: &TankRegistry, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Column {}\n", column.id));

    for (index, (fuel, tank_id)) in column.offerings.iter().enumerate() {
        let state = match tanks.get(*tank_id) {
            Ok(tank) if tank.enabled => format!("{} L available", tank.current_volume),
            Ok(_) => "tank disabled".to_string(),
            Err(_) => "tank missing".to_string(),
        };
        output.push_str(&format!(
            "  {}. {:<6} {:>8} {}/L  tank {}  {}\n",
            index + 1,
            fuel.name(),
            fuel.unit_price().to_string(),
            currency,
            tank_id,
            state
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnId;
    use crate::services::ColumnRouting;
    use crate::storage::{default_columns, default_tanks};

    #[test]
    fn test_format_column_list() {
        let tanks = TankRegistry::new(default_tanks()).unwrap();
        let output = format_column_list(&default_columns(), &tanks);

        assert!(output.contains("C8"));
        assert!(output.contains("#2"));
        assert!(output.contains("#3 (off)"));
    }

    #[test]
    fn test_format_column_offerings() {
        let tanks = TankRegistry::new(default_tanks()).unwrap();
        let routing = ColumnRouting::new(default_columns()).unwrap();
        let column = routing.get(ColumnId::new(7)).unwrap();
        let output = format_column_offerings(column, &tanks, "₽");

        assert!(output.contains("Column C7"));
        assert!(output.contains("1. АИ-95"));
        assert!(output.contains("tank disabled"));
        assert!(output.contains("2. ДТ"));
        assert!(output.contains("56.00 ₽/L"));
        assert!(output.contains("15600 L available"));
    }
}
