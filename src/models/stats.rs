//! Sales ledger model
//!
//! Counters only ever grow. Writes go through the crate-private recording
//! methods used by the transaction engine and the emergency controller; a
//! sale that would overflow any counter is refused before anything changes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::fuel::FuelType;
use super::money::Money;
use super::volume::Volume;

/// Liters and revenue accumulated for one fuel grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelLedger {
    pub liters_sold: Volume,
    pub money_earned: Money,
}

/// Station-wide sales statistics and the emergency flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub(crate) cars_served: u64,
    pub(crate) total_income: Money,
    pub(crate) per_fuel: BTreeMap<FuelType, FuelLedger>,
    #[serde(default)]
    pub(crate) emergency_flag: bool,
}

impl Default for Stats {
    /// Zeroed ledger with a row for every fuel grade
    fn default() -> Self {
        Self {
            cars_served: 0,
            total_income: Money::zero(),
            per_fuel: FuelType::ALL
                .iter()
                .map(|fuel| (*fuel, FuelLedger::default()))
                .collect(),
            emergency_flag: false,
        }
    }
}

impl Stats {
    /// The ledger after one more sale; `None` if a counter would overflow
    pub(crate) fn with_sale(&self, fuel: FuelType, liters: Volume, cost: Money) -> Option<Stats> {
        let ledger = self.per_fuel.get(&fuel).copied().unwrap_or_default();
        let ledger = FuelLedger {
            liters_sold: ledger.liters_sold.checked_add(liters)?,
            money_earned: ledger.money_earned.checked_add(cost)?,
        };

        let mut next = self.clone();
        next.cars_served = self.cars_served.checked_add(1)?;
        next.total_income = self.total_income.checked_add(cost)?;
        next.per_fuel.insert(fuel, ledger);
        Some(next)
    }

    /// Record one completed sale, leaving the ledger untouched on overflow
    #[cfg(test)]
    pub(crate) fn record_sale(&mut self, fuel: FuelType, liters: Volume, cost: Money) -> bool {
        match self.with_sale(fuel, liters, cost) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_emergency(&mut self, active: bool) {
        self.emergency_flag = active;
    }
}
