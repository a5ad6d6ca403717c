//! Emergency controller
//!
//! Two-state halt switch. Activation force-disables every tank and blocks
//! sales; clearing only lowers the flag, tanks stay off until re-enabled
//! one by one.

use std::fmt;

use tracing::{info, warn};

use crate::audit::EventKind;
use crate::error::{StationError, StationResult};
use crate::models::Stats;

use super::state::StationState;

/// Whether the station is halted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmergencyState {
    Normal,
    Emergency,
}

impl EmergencyState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Emergency)
    }
}

impl fmt::Display for EmergencyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Emergency => write!(f, "EMERGENCY"),
        }
    }
}

/// Transitions of the halt switch
pub struct EmergencyController;

impl EmergencyController {
    /// Current state, derived from the persisted flag
    pub fn state(stats: &Stats) -> EmergencyState {
        if stats.emergency_flag {
            EmergencyState::Emergency
        } else {
            EmergencyState::Normal
        }
    }

    /// Fail with `EmergencyActive` while halted
    pub fn ensure_sales_allowed(stats: &Stats) -> StationResult<()> {
        match Self::state(stats) {
            EmergencyState::Normal => Ok(()),
            EmergencyState::Emergency => Err(StationError::EmergencyActive),
        }
    }

    /// Enter emergency mode
    ///
    /// Disables every tank, raises the flag and appends one history entry.
    /// Returns `false` without touching anything when already halted.
    pub(crate) fn activate(state: &mut StationState) -> bool {
        if Self::state(&state.stats).is_active() {
            return false;
        }

        let disabled = state.tanks.disable_all();
        state.stats.set_emergency(true);
        state.history.append(
            EventKind::EmergencyActivated,
            format!("EMERGENCY MODE ACTIVATED: all tanks disabled ({} were enabled)", disabled),
        );
        warn!(disabled, "Emergency mode activated");
        true
    }

    /// Leave emergency mode; tanks are not re-enabled
    ///
    /// Returns `false` without touching anything when not halted.
    pub(crate) fn clear(state: &mut StationState) -> bool {
        if !Self::state(&state.stats).is_active() {
            return false;
        }

        state.stats.set_emergency(false);
        state.history.append(
            EventKind::EmergencyCleared,
            "Emergency mode cleared; tanks must be re-enabled manually",
        );
        info!("Emergency mode cleared");
        true
    }
}
