//! Money type for representing currency amounts
//!
//! Internally stores amounts in kopecks (i64) to avoid floating-point
//! precision issues in the sales ledger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

use super::volume::Volume;

/// Represents a monetary amount stored as kopecks (hundredths of a ruble)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from kopecks
    ///
    /// # Examples
    /// ```
    /// use fuel_station::models::Money;
    /// let amount = Money::from_kopecks(5750); // 57.50
    /// ```
    pub const fn from_kopecks(kopecks: i64) -> Self {
        Self(kopecks)
    }

    /// Create a Money amount from whole rubles and kopecks
    pub const fn from_rubles_kopecks(rubles: i64, kopecks: i64) -> Self {
        Self(rubles * 100 + kopecks)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in kopecks
    pub const fn kopecks(&self) -> i64 {
        self.0
    }

    /// Get the whole rubles portion (truncated toward zero)
    pub const fn rubles(&self) -> i64 {
        self.0 / 100
    }

    /// Get the kopecks portion (0-99)
    pub const fn kopecks_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Price of `volume` at `self` per liter, rounded half-up to the kopeck
    ///
    /// `None` when the price does not fit in the kopeck range.
    pub fn per_liter_times(&self, volume: Volume) -> Option<Money> {
        let raw = i128::from(self.0) * i128::from(volume.milliliters());
        let rounded = (raw + 500).div_euclid(1000);
        i64::try_from(rounded).ok().map(Money)
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Divide evenly, rounding half-up; `None` when `count` is zero
    pub fn average_over(&self, count: u64) -> Option<Money> {
        if count == 0 {
            return None;
        }
        let count = i128::from(count);
        let raw = i128::from(self.0);
        Some(Money(((raw * 2 + count) / (count * 2)) as i64))
    }

    /// Format with a trailing currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{} {}", self, symbol)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-{}.{:02}", self.rubles().abs(), self.kopecks_part())
        } else {
            write!(f, "{}.{:02}", self.rubles(), self.kopecks_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
