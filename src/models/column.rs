//! Column model
//!
//! A column is a dispenser unit. Each fuel grade it offers is piped from
//! exactly one tank.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::fuel::FuelType;
use super::ids::{ColumnId, TankId};

/// A dispenser column and its fuel routing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub offerings: BTreeMap<FuelType, TankId>,
}

impl Column {
    /// Create a column from `(fuel, tank)` pairs; a repeated fuel keeps the last tank
    pub fn new(id: ColumnId, offerings: impl IntoIterator<Item = (FuelType, TankId)>) -> Self {
        Self {
            id,
            offerings: offerings.into_iter().collect(),
        }
    }

    /// Tank that serves `fuel` at this column
    pub fn tank_for(&self, fuel: FuelType) -> Option<TankId> {
        self.offerings.get(&fuel).copied()
    }

    /// Whether any offering draws from `tank`
    pub fn uses_tank(&self, tank: TankId) -> bool {
        self.offerings.values().any(|t| *t == tank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_lookup() {
        let column = Column::new(
            ColumnId::new(5),
            [(FuelType::Ai95, TankId::new(3)), (FuelType::Ai92, TankId::new(1))],
        );
        assert_eq!(column.tank_for(FuelType::Ai95), Some(TankId::new(3)));
        assert_eq!(column.tank_for(FuelType::Ai98), None);
        assert!(column.uses_tank(TankId::new(1)));
        assert!(!column.uses_tank(TankId::new(2)));

        let fuels: Vec<_> = column.offerings.keys().copied().collect();
        assert_eq!(fuels, vec![FuelType::Ai92, FuelType::Ai95]);
    }

    #[test]
    fn test_serialization_round_trip() {
        let column = Column::new(ColumnId::new(7), [(FuelType::Diesel, TankId::new(5))]);
        let json = serde_json::to_string(&column).unwrap();
        assert_eq!(json, r#"{"id":7,"offerings":{"ДТ":5}}"#);

        let back: Column = serde_json::from_str(&json).unwrap();
        assert_eq!(back, column);
    }
}
