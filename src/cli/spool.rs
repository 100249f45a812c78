//! Spool CLI commands
//!
//! Implements CLI commands for inventory management.

use clap::{ArgGroup, Subcommand};

use crate::config::settings::Settings;
use crate::display::{format_inventory_table, format_low_stock, format_removal_question};
use crate::error::{FilamentError, FilamentResult};
use crate::models::Adjustment;
use crate::services::InventoryService;
use crate::storage::Storage;

use super::confirm;

/// Message printed when an adjustment matches nothing
pub const MODIFY_NOT_FOUND: &str = "Data to modify not found.";
/// Message printed when a removal matches nothing
pub const REMOVE_NOT_FOUND: &str = "Data to remove not found.";

/// Spool subcommands
#[derive(Subcommand)]
pub enum SpoolCommands {
    /// List every spool in the inventory
    List,
    /// Add a new spool
    Add {
        /// Material type (e.g. PLA)
        material_type: String,
        /// Color (e.g. WHITE)
        color: String,
        /// Grams on the spool
        grams: i64,
    },
    /// Add or subtract grams from an existing spool
    #[command(group(ArgGroup::new("direction").required(true).args(["add", "subtract"])))]
    Adjust {
        /// Material type
        material_type: String,
        /// Color
        color: String,
        /// Grams to add
        #[arg(long, value_name = "GRAMS")]
        add: Option<i64>,
        /// Grams to subtract
        #[arg(long, value_name = "GRAMS")]
        subtract: Option<i64>,
    },
    /// Remove a spool
    #[command(alias = "rm")]
    Remove {
        /// Material type
        material_type: String,
        /// Color
        color: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show spools at or below the warning level
    Low {
        /// Use this threshold instead of the saved warning level
        #[arg(short, long)]
        threshold: Option<i64>,
    },
}

/// Handle a spool command
pub fn handle_spool_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SpoolCommands,
) -> FilamentResult<()> {
    let service = InventoryService::new(storage, settings);

    match cmd {
        SpoolCommands::List => {
            let records = service.list()?;
            print!("{}", format_inventory_table(&records));
        }

        SpoolCommands::Add {
            material_type,
            color,
            grams,
        } => {
            let record = service.add(&material_type, &color, grams)?;
            println!("Added spool: {}", record);
        }

        SpoolCommands::Adjust {
            material_type,
            color,
            add,
            subtract,
        } => {
            let adjustment = match (add, subtract) {
                (Some(grams), _) => Adjustment::Add(grams),
                (None, Some(grams)) => Adjustment::Subtract(grams),
                (None, None) => {
                    return Err(FilamentError::Validation(
                        "Either --add or --subtract is required".into(),
                    ))
                }
            };

            match service.adjust(&material_type, &color, adjustment)? {
                Some(updated) => {
                    println!("Data successfully modified.");
                    println!("  {} -> {} g", updated.before, updated.after.quantity_grams);
                }
                None => println!("{}", MODIFY_NOT_FOUND),
            }
        }

        SpoolCommands::Remove {
            material_type,
            color,
            yes,
        } => {
            let (material_type, color) = service.normalize_key(&material_type, &color)?;

            let Some(record) = service.find(&material_type, &color)? else {
                println!("{}", REMOVE_NOT_FOUND);
                return Ok(());
            };

            if !yes && !confirm(&format_removal_question(&record))? {
                println!("Data not removed.");
                return Ok(());
            }

            match service.remove(&material_type, &color)? {
                Some(record) => println!("Data successfully removed: {}", record),
                None => println!("{}", REMOVE_NOT_FOUND),
            }
        }

        SpoolCommands::Low { threshold } => {
            let level = match threshold {
                Some(level) => level,
                None => service.warning_level()?,
            };
            let records = service.low_stock_at(level)?;
            print!("{}", format_low_stock(&records, level));
        }
    }

    Ok(())
}
