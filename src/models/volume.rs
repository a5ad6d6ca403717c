//! Volume type for fuel quantities
//!
//! Stored as whole milliliters so that tank arithmetic is exact. On disk and
//! on screen a volume is a number of liters with at most three decimals.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// A quantity of fuel in milliliters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Volume(i64);

impl Volume {
    pub const ZERO: Volume = Volume(0);

    /// Create a volume from whole liters
    pub const fn from_liters(liters: i64) -> Self {
        Self(liters * 1000)
    }

    /// Create a volume from milliliters
    pub const fn from_milliliters(milliliters: i64) -> Self {
        Self(milliliters)
    }

    /// Get the volume in milliliters
    pub const fn milliliters(&self) -> i64 {
        self.0
    }

    /// Volume in liters as a float (display and serialization only)
    pub fn as_liters_f64(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Volume) -> Option<Volume> {
        self.0.checked_add(other.0).map(Volume)
    }

    pub fn checked_sub(self, other: Volume) -> Option<Volume> {
        self.0.checked_sub(other.0).map(Volume)
    }

    /// The same quantity with the sign flipped, for debit deltas
    pub const fn negated(self) -> Volume {
        Volume(-self.0)
    }

    /// Parse operator input such as "500", "12.5" or "0,75"
    ///
    /// At most three decimals are accepted; a finer quantity cannot be
    /// measured in milliliters.
    pub fn parse(s: &str) -> Result<Self, VolumeParseError> {
        let trimmed = s.trim();
        let invalid = || VolumeParseError::InvalidFormat(trimmed.to_string());

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (whole, frac) = match unsigned.split_once(['.', ',']) {
            Some((whole, frac)) => (whole, frac),
            None => (unsigned, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }
        if frac.len() > 3 {
            return Err(VolumeParseError::TooPrecise(trimmed.to_string()));
        }

        let liters: i64 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| invalid())? };
        let frac_ml: i64 = format!("{:0<3}", frac).parse().map_err(|_| invalid())?;
        let ml = liters
            .checked_mul(1000)
            .and_then(|ml| ml.checked_add(frac_ml))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -ml } else { ml }))
    }

    fn try_from_liters_f64(liters: f64) -> Option<Self> {
        let ml = (liters * 1000.0).round();
        if !ml.is_finite() || ml.abs() > i64::MAX as f64 / 2.0 {
            return None;
        }
        Some(Self(ml as i64))
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let ml = self.0.abs();
        let whole = ml / 1000;
        let frac = ml % 1000;
        if frac == 0 {
            write!(f, "{}{}", sign, whole)
        } else {
            let digits = format!("{:03}", frac);
            write!(f, "{}{}.{}", sign, whole, digits.trim_end_matches('0'))
        }
    }
}

impl FromStr for Volume {
    type Err = VolumeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Volume {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Volume {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Volume {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Volume::ZERO, |acc, v| acc + v)
    }
}

impl Serialize for Volume {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 1000 == 0 {
            serializer.serialize_i64(self.0 / 1000)
        } else {
            serializer.serialize_f64(self.as_liters_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Volume {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let liters = f64::deserialize(deserializer)?;
        Self::try_from_liters_f64(liters)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid volume: {}", liters)))
    }
}

/// Error type for volume parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VolumeParseError {
    InvalidFormat(String),
    TooPrecise(String),
}

impl fmt::Display for VolumeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolumeParseError::InvalidFormat(s) => write!(f, "Invalid volume: '{}'", s),
            VolumeParseError::TooPrecise(s) => {
                write!(f, "Volume '{}' is finer than a milliliter (max 3 decimals)", s)
            }
        }
    }
}

impl std::error::Error for VolumeParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Volume::parse("500").unwrap(), Volume::from_liters(500));
        assert_eq!(Volume::parse(" 12.5 ").unwrap().milliliters(), 12500);
        assert_eq!(Volume::parse("0,75").unwrap().milliliters(), 750);
        assert_eq!(Volume::parse("-3").unwrap().milliliters(), -3000);
        assert!(Volume::parse("lots").is_err());
        assert!(Volume::parse("").is_err());
        assert!(Volume::parse("inf").is_err());
        assert!(Volume::parse("1.2.3").is_err());
        assert!(Volume::parse(".").is_err());
        assert_eq!(Volume::parse(".5").unwrap().milliliters(), 500);
        assert_eq!(Volume::parse("2500.5").unwrap().milliliters(), 2_500_500);
        assert_eq!(Volume::parse("0.001").unwrap().milliliters(), 1);
    }

    #[test]
    fn test_parse_rejects_sub_milliliter_input() {
        assert_eq!(
            Volume::parse("0.0004"),
            Err(VolumeParseError::TooPrecise("0.0004".to_string()))
        );
        assert!(Volume::parse("12,5001").is_err());
        let message = Volume::parse("0.0004").unwrap_err().to_string();
        assert!(message.contains("max 3 decimals"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Volume::from_liters(12400).to_string(), "12400");
        assert_eq!(Volume::from_milliliters(12500).to_string(), "12.5");
        assert_eq!(Volume::from_milliliters(1005).to_string(), "1.005");
        assert_eq!(Volume::from_milliliters(-250).to_string(), "-0.25");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Volume::from_liters(10);
        assert_eq!(a.checked_sub(Volume::from_liters(4)), Some(Volume::from_liters(6)));
        assert_eq!(a.checked_add(a), Some(Volume::from_liters(20)));
        assert_eq!(Volume::from_milliliters(i64::MAX).checked_add(a), None);
        assert_eq!(a.negated().milliliters(), -10_000);
    }

    #[test]
    fn test_serialization_as_liters() {
        assert_eq!(serde_json::to_string(&Volume::from_liters(20000)).unwrap(), "20000");
        assert_eq!(serde_json::to_string(&Volume::from_milliliters(1500)).unwrap(), "1.5");

        let v: Volume = serde_json::from_str("12400").unwrap();
        assert_eq!(v, Volume::from_liters(12400));
        let v: Volume = serde_json::from_str("11900.5").unwrap();
        assert_eq!(v.milliliters(), 11_900_500);
    }
}
