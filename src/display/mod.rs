//! Display formatting for terminal output
//!
//! Plain-text tables used by the CLI subcommands.

pub mod inventory;

pub use inventory::{format_inventory_table, format_low_stock, format_removal_question, format_summary};
