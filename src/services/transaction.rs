//! Transaction engine
//!
//! The single entry point for every state change at the station: sales,
//! refills, transfers, tank switching and the emergency halt. Each operation
//! validates everything first and only then mutates, so a failed call leaves
//! tanks, statistics and history exactly as they were.
//!
//! After a successful mutation the touched stores are written through the
//! [`Persistence`] collaborator. A write failure is returned as a
//! `PersistenceFailure` error, but the in-memory state keeps the change.

use tracing::{debug, error, warn};

use crate::audit::{EventKind, HistoryEntry};
use crate::error::{StationError, StationResult};
use crate::models::{ColumnId, FuelType, Money, Tank, TankId, Volume};
use crate::storage::{Persistence, StoreName};

use super::emergency::{EmergencyController, EmergencyState};
use super::routing::ColumnRouting;
use super::state::StationState;
use super::stats::StatsAggregator;
use super::tanks::TankRegistry;

/// Priced sale that has passed every check but has not been committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleQuote {
    pub column: ColumnId,
    pub fuel: FuelType,
    pub tank: TankId,
    pub liters: Volume,
    pub unit_price: Money,
    pub cost: Money,
}

/// Committed sale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleReceipt {
    pub quote: SaleQuote,
    /// Tank level after the debit
    pub remaining: Volume,
    pub cars_served: u64,
}

/// Result of [`TransactionEngine::service_client`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleOutcome {
    /// Not confirmed; nothing changed
    Quoted(SaleQuote),
    Completed(SaleReceipt),
}

/// Both tanks after a transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub from: Tank,
    pub to: Tank,
    pub amount: Volume,
}

/// Operator action on a single tank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TankAction {
    Enable,
    Disable,
}

/// Owner of the live station state
pub struct TransactionEngine<P: Persistence> {
    state: StationState,
    persistence: P,
}

impl<P: Persistence> TransactionEngine<P> {
    /// Wrap an already loaded state
    pub fn new(state: StationState, persistence: P) -> Self {
        Self { state, persistence }
    }

    /// Load the state from `persistence`, creating missing stores
    pub fn open(persistence: P) -> StationResult<Self> {
        let state = StationState::load(&persistence)?;
        Ok(Self::new(state, persistence))
    }

    pub fn state(&self) -> &StationState {
        &self.state
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn tanks(&self) -> &TankRegistry {
        &self.state.tanks
    }

    pub fn columns(&self) -> &ColumnRouting {
        &self.state.columns
    }

    pub fn stats(&self) -> StatsAggregator<'_> {
        self.state.stats()
    }

    /// The last `count` history entries, oldest first
    pub fn recent_history(&self, count: usize) -> &[HistoryEntry] {
        self.state.history.recent(count)
    }

    pub fn emergency_state(&self) -> EmergencyState {
        EmergencyController::state(&self.state.stats)
    }

    /// Price a sale without committing it
    pub fn quote(&self, column: ColumnId, fuel: FuelType, liters: Volume) -> StationResult<SaleQuote> {
        EmergencyController::ensure_sales_allowed(&self.state.stats)?;

        let tank_id = self.state.columns.resolve(column, fuel)?;
        let tank = self.state.tanks.get(tank_id)?;
        if tank.fuel_type != fuel {
            warn!(
                column = %column,
                fuel = %fuel,
                tank = %tank_id,
                holds = %tank.fuel_type,
                "Refusing sale from a tank of another grade"
            );
            return Err(StationError::FuelUnavailable { column, fuel });
        }
        if !tank.enabled {
            return Err(StationError::TankDisabled(tank_id));
        }
        if !liters.is_positive() {
            return Err(StationError::InvalidAmount(format!(
                "{} L is not a sellable quantity",
                liters
            )));
        }
        if liters > tank.current_volume {
            return Err(StationError::InsufficientFuel {
                tank: tank_id,
                requested: liters,
                available: tank.current_volume,
            });
        }

        let unit_price = fuel.unit_price();
        let cost = unit_price.per_liter_times(liters).ok_or_else(|| {
            StationError::InvalidAmount(format!("{} L of {} cannot be priced", liters, fuel))
        })?;
        if self.state.stats.with_sale(fuel, liters, cost).is_none() {
            return Err(StationError::InvalidAmount(format!(
                "{} L for {} would overflow the sales ledger",
                liters, cost
            )));
        }

        Ok(SaleQuote {
            column,
            fuel,
            tank: tank_id,
            liters,
            unit_price,
            cost,
        })
    }

    /// Serve a customer at a column
    ///
    /// Checks, in order: emergency halt, column, fuel offered at the column
    /// and held by the routed tank, routed tank enabled, positive quantity, enough fuel in the tank, a
    /// price and ledger totals that fit.
    /// Without `confirmed` the priced quote is returned and nothing changes.
    pub fn service_client(
        &mut self,
        column: ColumnId,
        fuel: FuelType,
        liters: Volume,
        confirmed: bool,
    ) -> StationResult<SaleOutcome> {
        let quote = self.quote(column, fuel, liters)?;
        if !confirmed {
            return Ok(SaleOutcome::Quoted(quote));
        }

        let ledger = self
            .state
            .stats
            .with_sale(fuel, liters, quote.cost)
            .ok_or_else(|| StationError::InvalidAmount("sales ledger would overflow".into()))?;
        let remaining = self
            .state
            .tanks
            .adjust_volume(quote.tank, liters.negated())?
            .current_volume;
        self.state.stats = ledger;
        self.state.history.append(
            EventKind::Sale,
            format!(
                "Sale at column {}: {} L {} from tank {} for {}",
                column, liters, fuel, quote.tank, quote.cost
            ),
        );
        debug!(
            column = %column,
            fuel = %fuel,
            liters = %liters,
            cost = %quote.cost,
            "Sale committed"
        );

        let receipt = SaleReceipt {
            quote,
            remaining,
            cars_served: self.state.stats.cars_served,
        };
        self.commit(&[StoreName::Tanks, StoreName::Stats, StoreName::History])?;
        Ok(SaleOutcome::Completed(receipt))
    }

    /// Top up a tank from a delivery
    pub fn refill(&mut self, tank: TankId, amount: Volume) -> StationResult<Tank> {
        self.state.tanks.get(tank)?;
        if !amount.is_positive() {
            return Err(StationError::InvalidAmount(format!(
                "refill amount must be positive, got {} L",
                amount
            )));
        }

        let updated = self.state.tanks.adjust_volume(tank, amount)?.clone();
        self.state.history.append(
            EventKind::Refill,
            format!(
                "Refill of tank {}: +{} L (now {} L)",
                updated, amount, updated.current_volume
            ),
        );
        debug!(tank = %tank, amount = %amount, "Tank refilled");

        self.commit(&[StoreName::Tanks, StoreName::History])?;
        Ok(updated)
    }

    /// Pump fuel from one tank into another of the same grade
    ///
    /// Checks existence of both tanks, distinct ids, matching grades, a
    /// positive amount, enough fuel in the source and room in the
    /// destination. Both legs are validated before either is applied.
    /// Disabled tanks may take part.
    pub fn transfer_fuel(
        &mut self,
        from: TankId,
        to: TankId,
        amount: Volume,
    ) -> StationResult<TransferReceipt> {
        let source = self.state.tanks.get(from)?;
        let destination = self.state.tanks.get(to)?;

        if from == to {
            return Err(StationError::InvalidAmount(format!(
                "cannot transfer from tank {} into itself",
                from
            )));
        }
        if source.fuel_type != destination.fuel_type {
            return Err(StationError::FuelTypeMismatch {
                from,
                from_fuel: source.fuel_type,
                to,
                to_fuel: destination.fuel_type,
            });
        }
        if !amount.is_positive() {
            return Err(StationError::InvalidAmount(format!(
                "transfer amount must be positive, got {} L",
                amount
            )));
        }

        self.state.tanks.check_adjust(from, amount.negated())?;
        self.state.tanks.check_adjust(to, amount)?;

        // Both legs checked above; distinct tanks so neither affects the other
        let from_tank = self.state.tanks.adjust_volume(from, amount.negated())?.clone();
        let to_tank = self.state.tanks.adjust_volume(to, amount)?.clone();

        self.state.history.append(
            EventKind::Transfer,
            format!(
                "Transfer of {} L {}: tank {} ({} L) -> tank {} ({} L)",
                amount,
                from_tank.fuel_type,
                from,
                from_tank.current_volume,
                to,
                to_tank.current_volume
            ),
        );
        debug!(from = %from, to = %to, amount = %amount, "Fuel transferred");

        self.commit(&[StoreName::Tanks, StoreName::History])?;
        Ok(TransferReceipt {
            from: from_tank,
            to: to_tank,
            amount,
        })
    }

    /// Switch a tank on or off
    ///
    /// Enabling requires the level to be at or above the minimum threshold.
    /// Allowed during an emergency.
    pub fn manage_tank(&mut self, tank: TankId, action: TankAction) -> StationResult<Tank> {
        let current = self.state.tanks.get(tank)?;

        let (enabled, kind, verb) = match action {
            TankAction::Enable => {
                if current.is_below_minimum() {
                    return Err(StationError::BelowMinimum {
                        tank,
                        current: current.current_volume,
                        minimum: current.min_threshold,
                    });
                }
                (true, EventKind::TankEnabled, "enabled")
            }
            TankAction::Disable => (false, EventKind::TankDisabled, "disabled"),
        };

        let updated = self.state.tanks.set_enabled(tank, enabled)?.clone();
        self.state
            .history
            .append(kind, format!("Tank {} {} by operator", updated, verb));
        debug!(tank = %tank, enabled, "Tank switched");

        self.commit(&[StoreName::Tanks, StoreName::History])?;
        Ok(updated)
    }

    /// Enter emergency mode
    ///
    /// Unconfirmed or redundant requests change nothing and return the
    /// current state.
    pub fn activate_emergency(&mut self, confirmed: bool) -> StationResult<EmergencyState> {
        if confirmed && EmergencyController::activate(&mut self.state) {
            self.commit(&[StoreName::Tanks, StoreName::Stats, StoreName::History])?;
        }
        Ok(self.emergency_state())
    }

    /// Leave emergency mode; tanks stay disabled
    pub fn clear_emergency(&mut self, confirmed: bool) -> StationResult<EmergencyState> {
        if confirmed && EmergencyController::clear(&mut self.state) {
            self.commit(&[StoreName::Stats, StoreName::History])?;
        }
        Ok(self.emergency_state())
    }

    /// Flip the emergency switch in whichever direction applies
    pub fn toggle_emergency(&mut self, confirmed: bool) -> StationResult<EmergencyState> {
        match self.emergency_state() {
            EmergencyState::Normal => self.activate_emergency(confirmed),
            EmergencyState::Emergency => self.clear_emergency(confirmed),
        }
    }

    /// Switch off enabled tanks below their minimum; persists if any changed
    pub fn apply_auto_disable(&mut self) -> StationResult<Vec<TankId>> {
        let disabled = self
            .state
            .tanks
            .apply_auto_disable(&mut self.state.history);
        if !disabled.is_empty() {
            self.commit(&[StoreName::Tanks, StoreName::History])?;
        }
        Ok(disabled)
    }

    /// Final save of every store
    pub fn shutdown(&self) -> StationResult<()> {
        self.commit(&StoreName::ALL)
    }

    fn commit(&self, stores: &[StoreName]) -> StationResult<()> {
        self.state
            .save(&self.persistence, stores)
            .map_err(|e| {
                error!(error = %e, "Failed to persist station state");
                e
            })
    }
}
