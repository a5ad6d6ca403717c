//! Configuration module for the fuel station
//!
//! This module provides configuration management including:
//! - Platform path resolution for the data directory
//! - Operator settings persistence

pub mod paths;
pub mod settings;

pub use paths::StationPaths;
pub use settings::Settings;
