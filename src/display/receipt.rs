//! Receipts and confirmations for completed operations

use crate::models::Tank;
use crate::services::{EmergencyState, SaleQuote, SaleReceipt, TransferReceipt};

/// Format a sale awaiting confirmation
pub fn format_quote(quote: &SaleQuote, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Column:      {}\n", quote.column));
    output.push_str(&format!("Fuel:        {} (tank {})\n", quote.fuel, quote.tank));
    output.push_str(&format!("Quantity:    {} L\n", quote.liters));
    output.push_str(&format!(
        "Price:       {}/L\n",
        quote.unit_price.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "To pay:      {}\n",
        quote.cost.format_with_symbol(currency)
    ));
    output
}

/// Format a committed sale
pub fn format_receipt(receipt: &SaleReceipt, currency: &str) -> String {
    let mut output = String::from("Sale completed\n");
    output.push_str(&format_quote(&receipt.quote, currency));
    output.push_str(&format!(
        "Tank left:   {} L\n",
        receipt.remaining
    ));
    output.push_str(&format!("Customer #:  {}\n", receipt.cars_served));
    output
}

pub fn format_refill(tank: &Tank) -> String {
    format!(
        "Tank {} refilled: {} / {} L\n",
        tank, tank.current_volume, tank.capacity_max
    )
}

pub fn format_transfer(receipt: &TransferReceipt) -> String {
    format!(
        "Transferred {} L {}\n  from {}: {} L\n  to   {}: {} L\n",
        receipt.amount,
        receipt.from.fuel_type,
        receipt.from.id,
        receipt.from.current_volume,
        receipt.to.id,
        receipt.to.current_volume
    )
}

pub fn format_tank_switch(tank: &Tank) -> String {
    let state = if tank.enabled { "enabled" } else { "disabled" };
    format!("Tank {} is now {}\n", tank, state)
}

pub fn format_emergency(state: EmergencyState) -> String {
    match state {
        EmergencyState::Emergency => {
            "EMERGENCY MODE: all tanks disabled, sales halted\n".to_string()
        }
        EmergencyState::Normal => {
            "Emergency mode off. Re-enable tanks individually.\n".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColumnId, FuelType, Money, TankId, Volume};

    fn quote() -> SaleQuote {
        SaleQuote {
            column: ColumnId::new(1),
            fuel: FuelType::Ai92,
            tank: TankId::new(1),
            liters: Volume::from_liters(500),
            unit_price: FuelType::Ai92.unit_price(),
            cost: Money::from_kopecks(2_875_000),
        }
    }

    #[test]
    fn test_format_quote() {
        let output = format_quote(&quote(), "₽");
        assert!(output.contains("Column:      C1"));
        assert!(output.contains("57.50 ₽/L"));
        assert!(output.contains("To pay:      28750.00 ₽"));
    }

    #[test]
    fn test_format_receipt() {
        let receipt = SaleReceipt {
            quote: quote(),
            remaining: Volume::from_liters(11900),
            cars_served: 3,
        };
        let output = format_receipt(&receipt, "₽");
        assert!(output.starts_with("Sale completed"));
        assert!(output.contains("11900 L"));
        assert!(output.contains("Customer #:  3"));
    }
}
