//! Display formatting for terminal output
//!
//! Every function returns a `String`; callers decide where it goes.

pub mod column;
pub mod receipt;
pub mod report;
pub mod tank;

pub use column::{format_column_list, format_column_offerings};
pub use receipt::{
    format_emergency, format_quote, format_receipt, format_refill, format_tank_switch,
    format_transfer,
};
pub use report::{format_history, format_stats};
pub use tank::{format_tank_details, format_tank_list};
