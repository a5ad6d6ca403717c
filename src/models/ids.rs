//! Strongly-typed ID wrappers for station entities
//!
//! Tanks and columns are both numbered from 1 on the station floor plan.
//! Newtype wrappers keep a column number from being passed where a tank
//! number is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate numeric ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create an ID from its station number
            pub const fn new(number: u32) -> Self {
                Self(number)
            }

            /// Get the station number
            pub const fn get(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<u32> for $name {
            fn from(number: u32) -> Self {
                Self(number)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(TankId, "#");
define_id!(ColumnId, "C");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TankId::new(3).to_string(), "#3");
        assert_eq!(ColumnId::new(7).to_string(), "C7");
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        assert_eq!("4".parse::<TankId>().unwrap(), TankId::new(4));
        assert_eq!("#4".parse::<TankId>().unwrap(), TankId::new(4));
        assert_eq!(" C2 ".parse::<ColumnId>().unwrap(), ColumnId::new(2));
        assert!("tank".parse::<TankId>().is_err());
        assert!("-1".parse::<ColumnId>().is_err());
    }

    #[test]
    fn test_ordering_follows_number() {
        let mut ids = vec![TankId::new(5), TankId::new(1), TankId::new(3)];
        ids.sort();
        assert_eq!(ids, vec![TankId::new(1), TankId::new(3), TankId::new(5)]);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TankId::new(2)).unwrap();
        assert_eq!(json, "2");
        let id: ColumnId = serde_json::from_str("8").unwrap();
        assert_eq!(id, ColumnId::new(8));
    }
}
