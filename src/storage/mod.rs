//! Storage layer for FilamentCLI
//!
//! Provides the flat-file inventory store, the warning level setting, and
//! atomic file helpers.

pub mod file_io;
pub mod inventory;
pub mod threshold;

pub use file_io::{append_text, read_text, write_json_atomic, write_text_atomic};
pub use inventory::{parse_inventory, InventoryStore};
pub use threshold::{ThresholdSetting, DEFAULT_WARNING_LEVEL};

use crate::audit::AuditLogger;
use crate::config::paths::FilamentPaths;
use crate::error::FilamentError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FilamentPaths,
    pub inventory: InventoryStore,
    pub threshold: ThresholdSetting,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FilamentPaths) -> Result<Self, FilamentError> {
        paths.ensure_directories()?;

        Ok(Self {
            inventory: InventoryStore::new(paths.inventory_file()),
            threshold: ThresholdSetting::new(paths.warning_level_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FilamentPaths {
        &self.paths
    }

    /// Create any missing data files with their defaults
    ///
    /// Existing files are left as they are, even if they do not parse.
    pub fn initialize(&self) -> Result<(), FilamentError> {
        self.inventory.ensure_initialized()?;
        self.threshold.ensure_initialized()?;
        Ok(())
    }
}
