//! Operator menu commands
//!
//! The menu is a closed set; dispatch in the shell matches on it
//! exhaustively.

use std::fmt;

/// One entry of the operator menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ServiceClient,
    ShowTanks,
    Refill,
    ShowStats,
    ShowHistory,
    Transfer,
    ManageTanks,
    ShowColumns,
    Emergency,
    Exit,
}

impl MenuCommand {
    /// All commands in menu order
    pub const ALL: [MenuCommand; 10] = [
        Self::ServiceClient,
        Self::ShowTanks,
        Self::Refill,
        Self::ShowStats,
        Self::ShowHistory,
        Self::Transfer,
        Self::ManageTanks,
        Self::ShowColumns,
        Self::Emergency,
        Self::Exit,
    ];

    /// Key the operator types to select the command
    pub fn key(&self) -> char {
        match self {
            Self::ServiceClient => '1',
            Self::ShowTanks => '2',
            Self::Refill => '3',
            Self::ShowStats => '4',
            Self::ShowHistory => '5',
            Self::Transfer => '6',
            Self::ManageTanks => '7',
            Self::ShowColumns => '8',
            Self::Emergency => '9',
            Self::Exit => '0',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ServiceClient => "Serve a customer",
            Self::ShowTanks => "Tank levels",
            Self::Refill => "Refill a tank",
            Self::ShowStats => "Income and statistics",
            Self::ShowHistory => "Operation history",
            Self::Transfer => "Transfer fuel between tanks",
            Self::ManageTanks => "Enable or disable a tank",
            Self::ShowColumns => "Column status",
            Self::Emergency => "EMERGENCY",
            Self::Exit => "Exit",
        }
    }

    /// Parse a menu selection
    pub fn from_key(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.key(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_and_round_trip() {
        for command in MenuCommand::ALL {
            assert_eq!(
                MenuCommand::from_key(&command.key().to_string()),
                Some(command)
            );
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(MenuCommand::from_key(" 1 "), Some(MenuCommand::ServiceClient));
        assert_eq!(MenuCommand::from_key("0"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::from_key("9"), Some(MenuCommand::Emergency));
        assert_eq!(MenuCommand::from_key("10"), None);
        assert_eq!(MenuCommand::from_key(""), None);
        assert_eq!(MenuCommand::from_key("x"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(MenuCommand::Refill.to_string(), "3) Refill a tank");
    }
}
