//! JSON export functionality
//!
//! A full snapshot of the inventory and the warning level.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FilamentError, FilamentResult};
use crate::models::SpoolRecord;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Snapshot of everything FilamentCLI stores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryExport {
    /// Export format version
    pub schema_version: u32,
    /// When the export was created
    pub exported_at: DateTime<Utc>,
    /// Version of the application that produced the export
    pub app_version: String,
    /// Warning level in grams
    pub warning_level: i64,
    /// Spools in file order
    pub spools: Vec<SpoolRecord>,
}

impl InventoryExport {
    /// Build a snapshot from storage
    pub fn from_storage(storage: &Storage) -> FilamentResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            warning_level: storage.threshold.get()?,
            spools: storage.inventory.load_all()?,
        })
    }
}

/// Export the inventory as JSON
pub fn export_inventory_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> FilamentResult<()> {
    let export = InventoryExport::from_storage(storage)?;

    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    result.map_err(|e| FilamentError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| FilamentError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FilamentPaths;
    use tempfile::TempDir;

    #[test]
    fn test_export_json() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(FilamentPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        storage.threshold.set(300).unwrap();

        let mut buffer = Vec::new();
        export_inventory_json(&storage, &mut buffer, false).unwrap();

        let export: InventoryExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.warning_level, 300);
        assert_eq!(export.spools, vec![SpoolRecord::seed()]);
    }
}
