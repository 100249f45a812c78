//! Export module for FilamentCLI
//!
//! Writes the inventory in three formats:
//! - CSV: spreadsheet-compatible spool list
//! - JSON: machine-readable snapshot including the warning level
//! - YAML: human-readable snapshot including the warning level

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::paths::FilamentPaths;
use crate::error::FilamentResult;
use crate::storage::Storage;

pub use self::csv::export_inventory_csv;
pub use json::{export_inventory_json, InventoryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_inventory_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values (spools only)
    Csv,
    /// JSON snapshot
    Json,
    /// YAML snapshot
    Yaml,
}

impl ExportFormat {
    /// Parse a format name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// File extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Default export location: `<base>/exports/filament-inventory-<date>.<ext>`
pub fn default_export_path(paths: &FilamentPaths, format: ExportFormat, date: NaiveDate) -> PathBuf {
    paths.export_dir().join(format!(
        "filament-inventory-{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    ))
}

/// Export the inventory in the requested format
pub fn export_inventory<W: Write>(
    storage: &Storage,
    format: ExportFormat,
    writer: &mut W,
) -> FilamentResult<()> {
    match format {
        ExportFormat::Csv => export_inventory_csv(storage, writer),
        ExportFormat::Json => export_inventory_json(storage, writer, true),
        ExportFormat::Yaml => export_inventory_yaml(storage, writer),
    }
}
