//! Warning level persistence
//!
//! The warning level is a single base-10 integer stored on its own in a text
//! file. Spools at or below it are reported as low stock.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{FilamentError, FilamentResult};

use super::file_io::{read_text, write_text_atomic};

/// Warning level used when none has been saved yet
pub const DEFAULT_WARNING_LEVEL: i64 = 250;

/// Repository for the warning level file
pub struct ThresholdSetting {
    path: PathBuf,
}

impl ThresholdSetting {
    /// Create a new threshold setting
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the default warning level if the file does not exist
    ///
    /// Returns `true` if the file was created.
    pub fn ensure_initialized(&self) -> FilamentResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        write_text_atomic(&self.path, &DEFAULT_WARNING_LEVEL.to_string())?;
        info!(value = DEFAULT_WARNING_LEVEL, "created warning level file");
        Ok(true)
    }

    /// Read the warning level, persisting the default if none exists
    ///
    /// A stored value that is not a non-negative integer is an
    /// `InvalidThreshold` error.
    pub fn get(&self) -> FilamentResult<i64> {
        if self.ensure_initialized()? {
            return Ok(DEFAULT_WARNING_LEVEL);
        }

        let contents = read_text(&self.path)?;
        let stored = contents.trim();
        match stored.parse::<i64>() {
            Ok(value) if value >= 0 => Ok(value),
            _ => Err(FilamentError::InvalidThreshold(stored.to_string())),
        }
    }

    /// Replace the warning level
    pub fn set(&self, value: i64) -> FilamentResult<()> {
        if value < 0 {
            return Err(FilamentError::Validation(format!(
                "Warning level cannot be negative: {}",
                value
            )));
        }

        write_text_atomic(&self.path, &value.to_string())?;
        info!(value, "saved warning level");
        Ok(())
    }
}
