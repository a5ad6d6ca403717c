//! Station state aggregate
//!
//! Tanks, columns, statistics and history loaded from the snapshot stores.
//! The transaction engine owns the one live instance; the other components
//! borrow it for the duration of a single call.

use tracing::{debug, warn};

use crate::audit::AuditLog;
use crate::error::StationResult;
use crate::models::{Column, Stats, Tank};
use crate::storage::{
    default_columns, default_stats, default_tanks, load_or_init, save_document, Persistence,
    StoreName,
};

use super::routing::ColumnRouting;
use super::stats::StatsAggregator;
use super::tanks::TankRegistry;

/// Everything the station knows, as one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationState {
    pub(crate) tanks: TankRegistry,
    pub(crate) columns: ColumnRouting,
    pub(crate) stats: Stats,
    pub(crate) history: AuditLog,
}

impl StationState {
    /// Assemble a state from its parts
    pub fn new(
        tanks: TankRegistry,
        columns: ColumnRouting,
        stats: Stats,
        history: AuditLog,
    ) -> Self {
        Self {
            tanks,
            columns,
            stats,
            history,
        }
    }

    /// The built-in station layout with zeroed statistics and empty history
    pub fn defaults() -> StationResult<Self> {
        Ok(Self::new(
            TankRegistry::new(default_tanks())?,
            ColumnRouting::new(default_columns())?,
            default_stats(),
            AuditLog::new(),
        ))
    }

    /// Load every store, creating absent ones from the built-in defaults
    pub fn load<P: Persistence + ?Sized>(persistence: &P) -> StationResult<Self> {
        let tanks: Vec<Tank> = load_or_init(persistence, StoreName::Tanks, default_tanks)?;
        let tanks = TankRegistry::new(tanks)?;
        let columns: Vec<Column> =
            load_or_init(persistence, StoreName::Columns, default_columns)?;
        let columns = ColumnRouting::new(columns)?;
        let stats = load_or_init(persistence, StoreName::Stats, default_stats)?;
        let history = load_or_init(persistence, StoreName::History, AuditLog::new)?;

        let state = Self::new(tanks, columns, stats, history);
        state.warn_on_broken_routes();
        debug!(
            tanks = state.tanks.list().len(),
            columns = state.columns.list().len(),
            history = state.history.len(),
            "Loaded station state"
        );
        Ok(state)
    }

    /// Write the given stores
    pub fn save<P: Persistence + ?Sized>(
        &self,
        persistence: &P,
        stores: &[StoreName],
    ) -> StationResult<()> {
        for store in stores {
            match store {
                StoreName::Tanks => save_document(persistence, *store, &self.tanks)?,
                StoreName::Columns => save_document(persistence, *store, &self.columns)?,
                StoreName::Stats => save_document(persistence, *store, &self.stats)?,
                StoreName::History => save_document(persistence, *store, &self.history)?,
            }
        }
        Ok(())
    }

    /// Write all four stores
    pub fn save_all<P: Persistence + ?Sized>(&self, persistence: &P) -> StationResult<()> {
        self.save(persistence, &StoreName::ALL)
    }

    pub fn tanks(&self) -> &TankRegistry {
        &self.tanks
    }

    pub fn columns(&self) -> &ColumnRouting {
        &self.columns
    }

    pub fn stats(&self) -> StatsAggregator<'_> {
        StatsAggregator::new(&self.stats)
    }

    pub fn history(&self) -> &AuditLog {
        &self.history
    }

    /// Routes to missing tanks or tanks of another grade fail at sale time;
    /// flag them once at load so the operator can fix the store.
    fn warn_on_broken_routes(&self) {
        for column in self.columns.list() {
            for (fuel, tank_id) in &column.offerings {
                match self.tanks.get(*tank_id) {
                    Err(_) => warn!(
                        column = %column.id,
                        fuel = %fuel,
                        tank = %tank_id,
                        "Column routes to a tank that does not exist"
                    ),
                    Ok(tank) if tank.fuel_type != *fuel => warn!(
                        column = %column.id,
                        fuel = %fuel,
                        tank = %tank_id,
                        holds = %tank.fuel_type,
                        "Column routes to a tank of another grade"
                    ),
                    Ok(_) => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_load_creates_default_stores() {
        let store = MemoryStore::new();
        let state = StationState::load(&store).unwrap();

        assert_eq!(state, StationState::defaults().unwrap());
        for name in StoreName::ALL {
            assert_eq!(store.save_count(name), 1, "{} not created", name);
        }
    }

    #[test]
    fn test_save_then_load_restores_state() {
        let store = MemoryStore::new();
        let mut state = StationState::defaults().unwrap();
        state.tanks.disable_all();
        state.stats.set_emergency(true);
        state.save_all(&store).unwrap();

        let loaded = StationState::load(&store).unwrap();
        assert_eq!(loaded, state);
        assert!(loaded.stats().emergency_active());
    }

    #[test]
    fn test_save_only_requested_stores() {
        let store = MemoryStore::new();
        let state = StationState::defaults().unwrap();
        state
            .save(&store, &[StoreName::Tanks, StoreName::History])
            .unwrap();

        assert_eq!(store.save_count(StoreName::Tanks), 1);
        assert_eq!(store.save_count(StoreName::History), 1);
        assert_eq!(store.save_count(StoreName::Stats), 0);
    }
}
