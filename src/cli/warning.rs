//! Warning level CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::FilamentResult;
use crate::services::InventoryService;
use crate::storage::Storage;

/// Warning level subcommands
#[derive(Subcommand)]
pub enum WarningCommands {
    /// Show the current warning level
    Show,
    /// Set the warning level in grams
    Set {
        /// New warning level
        grams: i64,
    },
}

/// Handle a warning level command
pub fn handle_warning_command(
    storage: &Storage,
    settings: &Settings,
    cmd: WarningCommands,
) -> FilamentResult<()> {
    let service = InventoryService::new(storage, settings);

    match cmd {
        WarningCommands::Show => {
            println!("Warning level: {} g", service.warning_level()?);
        }
        WarningCommands::Set { grams } => {
            match service.set_warning_level(grams)? {
                Some(previous) => println!(
                    "The warning level has been changed to {} grams (was {} grams).",
                    grams, previous
                ),
                None => println!("The warning level has been changed to {} grams.", grams),
            }
        }
    }

    Ok(())
}
