//! Storage initialization
//!
//! Built-in station layout used when a store does not exist yet.

use crate::audit::AuditLog;
use crate::error::StationError;
use crate::models::{Column, ColumnId, FuelType, Stats, Tank, TankId, Volume};

use super::{load_or_init, Persistence, StoreName};

/// Initialize storage for a fresh installation
///
/// Writes the default document of every store that does not exist yet and
/// leaves existing stores untouched. Returns the stores that were created.
pub fn initialize_storage<P>(persistence: &P) -> Result<Vec<StoreName>, StationError>
where
    P: Persistence + ?Sized,
{
    let mut created = Vec::new();
    for store in StoreName::ALL {
        if persistence.load(store)?.is_some() {
            continue;
        }
        match store {
            StoreName::Tanks => {
                load_or_init(persistence, store, default_tanks)?;
            }
            StoreName::Columns => {
                load_or_init(persistence, store, default_columns)?;
            }
            StoreName::Stats => {
                load_or_init(persistence, store, default_stats)?;
            }
            StoreName::History => {
                load_or_init(persistence, store, AuditLog::new)?;
            }
        }
        created.push(store);
    }
    Ok(created)
}

/// The station's five tanks
pub fn default_tanks() -> Vec<Tank> {
    let tank = |id, fuel, max, current, min, enabled| Tank {
        id: TankId::new(id),
        fuel_type: fuel,
        capacity_max: Volume::from_liters(max),
        current_volume: Volume::from_liters(current),
        min_threshold: Volume::from_liters(min),
        enabled,
    };

    vec![
        tank(1, FuelType::Ai92, 20000, 12400, 3000, true),
        tank(2, FuelType::Ai95, 20000, 9800, 3000, true),
        tank(3, FuelType::Ai95, 20000, 1200, 3000, false),
        tank(4, FuelType::Ai98, 15000, 10000, 2500, false),
        tank(5, FuelType::Diesel, 25000, 15600, 4000, true),
    ]
}

/// The station's eight columns
///
/// Columns 1-4 draw АИ-95 from tank 2, columns 5-8 from tank 3.
pub fn default_columns() -> Vec<Column> {
    use FuelType::{Ai92, Ai95, Ai98, Diesel};

    let column = |id, offerings: &[(FuelType, u32)]| {
        Column::new(
            ColumnId::new(id),
            offerings.iter().map(|(fuel, tank)| (*fuel, TankId::new(*tank))),
        )
    };

    vec![
        column(1, &[(Ai92, 1), (Ai95, 2)]),
        column(2, &[(Ai92, 1), (Ai95, 2)]),
        column(3, &[(Ai92, 1), (Ai95, 2), (Ai98, 4), (Diesel, 5)]),
        column(4, &[(Ai92, 1), (Ai95, 2), (Ai98, 4)]),
        column(5, &[(Ai92, 1), (Ai95, 3), (Diesel, 5)]),
        column(6, &[(Ai92, 1), (Ai95, 3), (Ai98, 4), (Diesel, 5)]),
        column(7, &[(Ai95, 3), (Diesel, 5)]),
        column(8, &[(Ai95, 3), (Diesel, 5)]),
    ]
}

/// Zeroed statistics
pub fn default_stats() -> Stats {
    Stats::default()
}
