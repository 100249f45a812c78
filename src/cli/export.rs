//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::Local;

use crate::error::{FilamentError, FilamentResult};
use crate::export::{default_export_path, export_inventory, ExportFormat};
use crate::storage::Storage;

/// Export the inventory to `output`, or to the default export location
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> FilamentResult<PathBuf> {
    let output = match output {
        Some(path) => path,
        None => {
            let export_dir = storage.paths().export_dir();
            std::fs::create_dir_all(&export_dir).map_err(|e| {
                FilamentError::Io(format!("Failed to create export directory: {}", e))
            })?;
            default_export_path(storage.paths(), format, Local::now().date_naive())
        }
    };

    let file = File::create(&output).map_err(|e| {
        FilamentError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    export_inventory(storage, format, &mut writer)?;
    writer
        .flush()
        .map_err(|e| FilamentError::Export(e.to_string()))?;

    println!("Inventory exported to: {}", output.display());
    Ok(output)
}
