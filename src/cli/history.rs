//! History CLI command
//!
//! Prints recent entries from the change history.

use crate::error::FilamentResult;
use crate::storage::Storage;

/// Print the most recent `limit` audit entries, oldest first
pub fn handle_history_command(storage: &Storage, limit: usize) -> FilamentResult<()> {
    let entries = storage.audit.read_recent(limit)?;

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry);
    }

    Ok(())
}
