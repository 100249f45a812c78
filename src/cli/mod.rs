//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod export;
pub mod history;
pub mod spool;
pub mod warning;

use std::io::{self, BufRead, Write};

use crate::error::{FilamentError, FilamentResult};

pub use config::{handle_config_command, ConfigArgs};
pub use export::handle_export_command;
pub use history::handle_history_command;
pub use spool::{handle_spool_command, SpoolCommands};
pub use warning::{handle_warning_command, WarningCommands};

/// Prompt for a line of input on stdin
pub fn prompt_string(prompt: &str) -> FilamentResult<String> {
    print!("{}", prompt);
    io::stdout().flush().map_err(|e| FilamentError::Io(e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| FilamentError::Io(e.to_string()))?;

    Ok(input.trim().to_string())
}

/// Ask a Y/N question; anything other than y/yes counts as no
pub fn confirm(prompt: &str) -> FilamentResult<bool> {
    let answer = prompt_string(&format!("{} (Y/N): ", prompt))?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}
