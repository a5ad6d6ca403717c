//! Fuel station manager
//!
//! Tracks bounded fuel tanks, the dispenser columns that draw from them, a
//! running sales ledger and an append-only history of every operation.
//! All changes go through the transaction engine, which checks the physical
//! bounds of each tank before touching anything.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and operator settings
//! - `error`: Error types and their categories
//! - `models`: Tanks, columns, statistics and the value types they use
//! - `storage`: Snapshot stores behind the `Persistence` trait
//! - `audit`: Append-only operation history
//! - `services`: Transaction engine, tank registry, routing, emergency switch
//! - `display`: Text formatting for terminal output
//! - `cli`: One-shot command handlers
//! - `shell`: Interactive operator menu
//!
//! # Example
//!
//! ```rust
//! use fuel_station::models::{ColumnId, FuelType, Volume};
//! use fuel_station::services::{SaleOutcome, TransactionEngine};
//! use fuel_station::storage::MemoryStore;
//!
//! let mut engine = TransactionEngine::open(MemoryStore::new())?;
//! let outcome = engine.service_client(
//!     ColumnId::new(1),
//!     FuelType::Ai92,
//!     Volume::from_liters(500),
//!     true,
//! )?;
//! if let SaleOutcome::Completed(receipt) = outcome {
//!     assert_eq!(receipt.quote.cost.to_string(), "28750.00");
//! }
//! # Ok::<(), fuel_station::error::StationError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{ErrorKind, StationError, StationResult};
