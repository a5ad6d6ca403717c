//! Statistics aggregator
//!
//! Read-only view over the sales ledger. Recording happens inside the
//! transaction engine.

use crate::models::{FuelLedger, FuelType, Money, Stats, Volume};

/// Borrowed view of the station's sales statistics
#[derive(Debug, Clone, Copy)]
pub struct StatsAggregator<'a> {
    stats: &'a Stats,
}

impl<'a> StatsAggregator<'a> {
    pub fn new(stats: &'a Stats) -> Self {
        Self { stats }
    }

    /// Number of completed sales
    pub fn cars_served(&self) -> u64 {
        self.stats.cars_served
    }

    pub fn total_income(&self) -> Money {
        self.stats.total_income
    }

    /// Ledger row for one grade; grades never sold report zero
    pub fn fuel(&self, fuel: FuelType) -> FuelLedger {
        self.stats.per_fuel.get(&fuel).copied().unwrap_or_default()
    }

    /// Ledger rows for every grade, in grade order
    pub fn per_fuel(&self) -> Vec<(FuelType, FuelLedger)> {
        FuelType::ALL.iter().map(|f| (*f, self.fuel(*f))).collect()
    }

    pub fn total_liters_sold(&self) -> Volume {
        self.stats.per_fuel.values().map(|l| l.liters_sold).sum()
    }

    /// Mean receipt, or `None` before the first sale
    pub fn average_sale(&self) -> Option<Money> {
        self.stats.total_income.average_over(self.stats.cars_served)
    }

    pub fn emergency_active(&self) -> bool {
        self.stats.emergency_flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = Stats::default();
        let view = StatsAggregator::new(&stats);

        assert_eq!(view.cars_served(), 0);
        assert_eq!(view.total_income(), Money::zero());
        assert_eq!(view.average_sale(), None);
        assert_eq!(view.total_liters_sold(), Volume::ZERO);
        assert_eq!(view.per_fuel().len(), 4);
        assert!(!view.emergency_active());
    }

    #[test]
    fn test_totals_match_per_fuel_rows() {
        let mut stats = Stats::default();
        stats.record_sale(FuelType::Ai92, Volume::from_liters(500), Money::from_kopecks(2875000));
        stats.record_sale(FuelType::Diesel, Volume::from_liters(40), Money::from_kopecks(224000));
        stats.record_sale(FuelType::Ai92, Volume::from_liters(10), Money::from_kopecks(57500));
        let view = StatsAggregator::new(&stats);

        assert_eq!(view.cars_served(), 3);
        assert_eq!(view.total_liters_sold(), Volume::from_liters(550));
        let row_sum: Money = view.per_fuel().iter().map(|(_, l)| l.money_earned).sum();
        assert_eq!(row_sum, view.total_income());
        assert_eq!(view.fuel(FuelType::Ai92).liters_sold, Volume::from_liters(510));
        assert_eq!(view.fuel(FuelType::Ai98), FuelLedger::default());
        assert_eq!(view.average_sale(), Some(Money::from_kopecks(1052167)));
    }
}
