//! Column routing
//!
//! Read-only map from dispenser column to the tank serving each fuel grade.
//! Populated once at startup.

use serde::{Deserialize, Serialize};

use crate::error::{StationError, StationResult};
use crate::models::{Column, ColumnId, FuelType, TankId};

/// All dispenser columns, ordered by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct ColumnRouting {
    columns: Vec<Column>,
}

impl ColumnRouting {
    /// Build the routing table, rejecting duplicate column ids
    pub fn new(mut columns: Vec<Column>) -> StationResult<Self> {
        columns.sort_by_key(|c| c.id);
        if let Some(pair) = columns.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(StationError::Storage(format!(
                "Duplicate column id {}",
                pair[0].id
            )));
        }
        Ok(Self { columns })
    }

    /// All columns, ordered by id
    pub fn list(&self) -> &[Column] {
        &self.columns
    }

    pub fn get(&self, column: ColumnId) -> StationResult<&Column> {
        self.columns
            .iter()
            .find(|c| c.id == column)
            .ok_or(StationError::InvalidColumn(column))
    }

    /// Fuel grades offered at a column with their source tanks, in grade order
    pub fn offered_fuels(&self, column: ColumnId) -> StationResult<Vec<(FuelType, TankId)>> {
        let column = self.get(column)?;
        Ok(column
            .offerings
            .iter()
            .map(|(fuel, tank)| (*fuel, *tank))
            .collect())
    }

    /// Tank that serves `fuel` at `column`
    pub fn resolve(&self, column: ColumnId, fuel: FuelType) -> StationResult<TankId> {
        self.get(column)?
            .tank_for(fuel)
            .ok_or(StationError::FuelUnavailable { column, fuel })
    }

    /// Columns drawing from `tank`
    pub fn columns_using(&self, tank: TankId) -> Vec<ColumnId> {
        self.columns
            .iter()
            .filter(|c| c.uses_tank(tank))
            .map(|c| c.id)
            .collect()
    }
}

impl TryFrom<Vec<Column>> for ColumnRouting {
    type Error = StationError;

    fn try_from(columns: Vec<Column>) -> Result<Self, Self::Error> {
        Self::new(columns)
    }
}

impl From<ColumnRouting> for Vec<Column> {
    fn from(routing: ColumnRouting) -> Self {
        routing.columns
    }
}
