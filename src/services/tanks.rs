//! Tank registry
//!
//! Owns the station's tanks and enforces the physical bounds
//! `0 <= current <= capacity` on every volume change.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::audit::{AuditLog, EventKind};
use crate::error::{StationError, StationResult};
use crate::models::{Tank, TankId, Volume};

/// The set of tanks, ordered by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tank>", into = "Vec<Tank>")]
pub struct TankRegistry {
    tanks: Vec<Tank>,
}

impl TankRegistry {
    /// Build a registry, rejecting invalid tanks and duplicate ids
    pub fn new(mut tanks: Vec<Tank>) -> StationResult<Self> {
        for tank in &tanks {
            tank.validate()
                .map_err(|e| StationError::Storage(format!("Tank {}: {}", tank.id, e)))?;
        }

        tanks.sort_by_key(|t| t.id);
        if let Some(pair) = tanks.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(StationError::Storage(format!(
                "Duplicate tank id {}",
                pair[0].id
            )));
        }

        Ok(Self { tanks })
    }

    /// Get a tank by id
    pub fn get(&self, id: TankId) -> StationResult<&Tank> {
        self.tanks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| StationError::tank_not_found(id))
    }

    /// All tanks, ordered by id
    pub fn list(&self) -> &[Tank] {
        &self.tanks
    }

    pub fn contains(&self, id: TankId) -> bool {
        self.tanks.iter().any(|t| t.id == id)
    }

    /// Disable every enabled tank that sits below its minimum threshold
    ///
    /// Appends one `AutoDisabled` entry per tank switched off and returns
    /// their ids. Running it again without volume changes does nothing.
    pub fn apply_auto_disable(&mut self, log: &mut AuditLog) -> Vec<TankId> {
        let mut disabled = Vec::new();
        for tank in self.tanks.iter_mut().filter(|t| t.needs_auto_disable()) {
            tank.enabled = false;
            log.append(
                EventKind::AutoDisabled,
                format!(
                    "Tank {} disabled: low level ({} L < {} L)",
                    tank, tank.current_volume, tank.min_threshold
                ),
            );
            debug!(tank = %tank.id, current = %tank.current_volume, "Auto-disabled tank");
            disabled.push(tank.id);
        }
        disabled
    }

    /// Volume the tank would hold after applying `delta`, without changing it
    pub fn check_adjust(&self, id: TankId, delta: Volume) -> StationResult<Volume> {
        let tank = self.get(id)?;

        if delta.is_negative() {
            let requested = delta.negated();
            match tank.current_volume.checked_sub(requested) {
                Some(next) if !next.is_negative() => Ok(next),
                _ => Err(StationError::InsufficientFuel {
                    tank: id,
                    requested,
                    available: tank.current_volume,
                }),
            }
        } else {
            match tank.current_volume.checked_add(delta) {
                Some(next) if next <= tank.capacity_max => Ok(next),
                _ => Err(StationError::CapacityExceeded {
                    tank: id,
                    requested: delta,
                    free: tank.free_capacity(),
                }),
            }
        }
    }

    /// Apply `current += delta`, rejecting results outside `[0, capacity]`
    ///
    /// Does not log or persist; that is the caller's job.
    pub fn adjust_volume(&mut self, id: TankId, delta: Volume) -> StationResult<&Tank> {
        let next = self.check_adjust(id, delta)?;
        let tank = self.get_mut(id)?;
        tank.current_volume = next;
        Ok(tank)
    }

    pub(crate) fn set_enabled(&mut self, id: TankId, enabled: bool) -> StationResult<&Tank> {
        let tank = self.get_mut(id)?;
        tank.enabled = enabled;
        Ok(tank)
    }

    /// Switch every tank off regardless of level; returns how many changed
    pub(crate) fn disable_all(&mut self) -> usize {
        let mut changed = 0;
        for tank in self.tanks.iter_mut().filter(|t| t.enabled) {
            tank.enabled = false;
            changed += 1;
        }
        changed
    }

    fn get_mut(&mut self, id: TankId) -> StationResult<&mut Tank> {
        self.tanks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StationError::tank_not_found(id))
    }
}

impl TryFrom<Vec<Tank>> for TankRegistry {
    type Error = StationError;

    fn try_from(tanks: Vec<Tank>) -> Result<Self, Self::Error> {
        Self::new(tanks)
    }
}

impl From<TankRegistry> for Vec<Tank> {
    fn from(registry: TankRegistry) -> Self {
        registry.tanks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::FuelType;
    use crate::storage::default_tanks;

    fn registry() -> TankRegistry {
        TankRegistry::new(default_tanks()).unwrap()
    }

    #[test]
    fn test_list_is_sorted_by_id() {
        let mut tanks = default_tanks();
        tanks.reverse();
        let registry = TankRegistry::new(tanks).unwrap();
        let ids: Vec<u32> = registry.list().iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_get_missing_tank() {
        let err = registry().get(TankId::new(42)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut tanks = default_tanks();
        tanks.push(tanks[0].clone());
        assert!(TankRegistry::new(tanks).is_err());
    }

    #[test]
    fn test_rejects_overfilled_tank() {
        let mut tanks = default_tanks();
        tanks[0].current_volume = Volume::from_liters(20001);
        assert!(TankRegistry::new(tanks).unwrap_err().is_persistence());
    }

    #[test]
    fn test_adjust_volume_within_bounds() {
        let mut registry = registry();
        let tank = registry
            .adjust_volume(TankId::new(1), Volume::from_liters(-500))
            .unwrap();
        assert_eq!(tank.current_volume, Volume::from_liters(11900));

        // Filling exactly to capacity is allowed
        let tank = registry
            .adjust_volume(TankId::new(1), Volume::from_liters(8100))
            .unwrap();
        assert_eq!(tank.current_volume, tank.capacity_max);
    }

    #[test]
    fn test_adjust_volume_rejects_overflow() {
        let mut registry = registry();
        let err = registry
            .adjust_volume(TankId::new(2), Volume::from_liters(11000))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(
            registry.get(TankId::new(2)).unwrap().current_volume,
            Volume::from_liters(9800)
        );
    }

    #[test]
    fn test_adjust_volume_rejects_underflow() {
        let mut registry = registry();
        let err = registry
            .adjust_volume(TankId::new(3), Volume::from_liters(-1201))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientFuel);

        // Draining to exactly zero is allowed
        let tank = registry
            .adjust_volume(TankId::new(3), Volume::from_liters(-1200))
            .unwrap();
        assert_eq!(tank.current_volume, Volume::ZERO);
    }

    #[test]
    fn test_auto_disable_is_idempotent() {
        let mut registry = registry();
        let mut log = AuditLog::new();

        registry
            .adjust_volume(TankId::new(1), Volume::from_liters(-10000))
            .unwrap();
        assert!(registry.get(TankId::new(1)).unwrap().enabled);

        let disabled = registry.apply_auto_disable(&mut log);
        assert_eq!(disabled, vec![TankId::new(1)]);
        assert!(!registry.get(TankId::new(1)).unwrap().enabled);
        assert_eq!(log.of_kind(EventKind::AutoDisabled).count(), 1);

        assert!(registry.apply_auto_disable(&mut log).is_empty());
        assert_eq!(log.len(), 1);

        for tank in registry.list() {
            assert!(!tank.enabled || tank.current_volume >= tank.min_threshold);
        }
    }

    #[test]
    fn test_disable_all() {
        let mut registry = registry();
        assert_eq!(registry.disable_all(), 3);
        assert!(registry.list().iter().all(|t| !t.enabled));
        assert_eq!(registry.disable_all(), 0);
    }

    #[test]
    fn test_deserializes_from_plain_array() {
        let json = r#"[
            {"id": 2, "fuelType": "ДТ", "capacityMax": 100, "currentVolume": 50,
             "minThreshold": 10, "enabled": true},
            {"id": 1, "fuelType": "АИ-92", "capacityMax": 100, "currentVolume": 5,
             "minThreshold": 10, "enabled": false}
        ]"#;
        let registry: TankRegistry = serde_json::from_str(json).unwrap();
        assert_eq!(registry.list()[0].id, TankId::new(1));
        assert_eq!(registry.get(TankId::new(2)).unwrap().fuel_type, FuelType::Diesel);

        let bad = r#"[{"id": 1, "fuelType": "ДТ", "capacityMax": 100,
            "currentVolume": 150, "minThreshold": 10, "enabled": true}]"#;
        assert!(serde_json::from_str::<TankRegistry>(bad).is_err());
    }
}
