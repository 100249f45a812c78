//! CSV export functionality

use std::io::Write;

use crate::error::{FilamentError, FilamentResult};
use crate::storage::Storage;

/// Export every spool to CSV with a `Material,Color,Grams` header
pub fn export_inventory_csv<W: Write>(storage: &Storage, writer: &mut W) -> FilamentResult<()> {
    let records = storage.inventory.load_all()?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["Material", "Color", "Grams"])
        .map_err(|e| FilamentError::Export(e.to_string()))?;

    for record in &records {
        csv_writer
            .write_record([
                record.material_type.as_str(),
                record.color.as_str(),
                &record.quantity_grams.to_string(),
            ])
            .map_err(|e| FilamentError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FilamentError::Export(e.to_string()))?;

    Ok(())
}
