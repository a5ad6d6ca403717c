//! Fuel grades and the station price table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Fuel grade held by a tank and offered at a column
///
/// Declaration order is the display order used everywhere on the station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FuelType {
    #[serde(rename = "АИ-92")]
    Ai92,
    #[serde(rename = "АИ-95")]
    Ai95,
    #[serde(rename = "АИ-98")]
    Ai98,
    #[serde(rename = "ДТ")]
    Diesel,
}

impl FuelType {
    /// All fuel grades in display order
    pub const ALL: [FuelType; 4] = [Self::Ai92, Self::Ai95, Self::Ai98, Self::Diesel];

    /// Canonical station name of the grade
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ai92 => "АИ-92",
            Self::Ai95 => "АИ-95",
            Self::Ai98 => "АИ-98",
            Self::Diesel => "ДТ",
        }
    }

    /// Price per liter from the compiled-in price table
    pub const fn unit_price(&self) -> Money {
        match self {
            Self::Ai92 => Money::from_rubles_kopecks(57, 50),
            Self::Ai95 => Money::from_rubles_kopecks(58, 30),
            Self::Ai98 => Money::from_rubles_kopecks(64, 90),
            Self::Diesel => Money::from_rubles_kopecks(56, 0),
        }
    }

    /// Parse a fuel grade from operator input
    ///
    /// Accepts the canonical name plus Latin spellings: "АИ-95", "ai95",
    /// "AI-95", "95", "ДТ", "dt", "diesel".
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | ' ' | '_'))
            .collect();

        match key.as_str() {
            "аи92" | "ai92" | "92" => Some(Self::Ai92),
            "аи95" | "ai95" | "95" => Some(Self::Ai95),
            "аи98" | "ai98" | "98" => Some(Self::Ai98),
            "дт" | "dt" | "diesel" => Some(Self::Diesel),
            _ => None,
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FuelType {
    type Err = FuelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| FuelParseError(s.trim().to_string()))
    }
}

/// Error type for fuel grade parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelParseError(pub String);

impl fmt::Display for FuelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown fuel '{}'. Valid grades: АИ-92, АИ-95, АИ-98, ДТ",
            self.0
        )
    }
}

impl std::error::Error for FuelParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_table() {
        assert_eq!(FuelType::Ai92.unit_price().kopecks(), 5750);
        assert_eq!(FuelType::Ai95.unit_price().kopecks(), 5830);
        assert_eq!(FuelType::Ai98.unit_price().kopecks(), 6490);
        assert_eq!(FuelType::Diesel.unit_price().kopecks(), 5600);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(FuelType::parse("АИ-92"), Some(FuelType::Ai92));
        assert_eq!(FuelType::parse("аи-95"), Some(FuelType::Ai95));
        assert_eq!(FuelType::parse("AI-98"), Some(FuelType::Ai98));
        assert_eq!(FuelType::parse("95"), Some(FuelType::Ai95));
        assert_eq!(FuelType::parse("Diesel"), Some(FuelType::Diesel));
        assert_eq!(FuelType::parse("ДТ"), Some(FuelType::Diesel));
        assert_eq!(FuelType::parse("100"), None);
        assert!("kerosene".parse::<FuelType>().is_err());
    }

    #[test]
    fn test_serialization_uses_station_names() {
        assert_eq!(serde_json::to_string(&FuelType::Diesel).unwrap(), "\"ДТ\"");
        let fuel: FuelType = serde_json::from_str("\"АИ-95\"").unwrap();
        assert_eq!(fuel, FuelType::Ai95);
    }

    #[test]
    fn test_display_order() {
        let mut grades = vec![FuelType::Diesel, FuelType::Ai92, FuelType::Ai98];
        grades.sort();
        assert_eq!(grades, vec![FuelType::Ai92, FuelType::Ai98, FuelType::Diesel]);
    }
}
