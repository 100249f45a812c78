//! YAML export functionality

use std::io::Write;

use crate::error::{FilamentError, FilamentResult};
use crate::export::json::InventoryExport;
use crate::storage::Storage;

/// Export the inventory as YAML with a short header comment
pub fn export_inventory_yaml<W: Write>(storage: &Storage, writer: &mut W) -> FilamentResult<()> {
    let export = InventoryExport::from_storage(storage)?;

    let io_err = |e: std::io::Error| FilamentError::Export(e.to_string());
    writeln!(writer, "# FilamentCLI Inventory Export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FilamentError::Export(e.to_string()))?;

    Ok(())
}
