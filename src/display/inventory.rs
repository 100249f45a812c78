//! Inventory display formatting
//!
//! Formats spool records for terminal output.

use crate::models::SpoolRecord;
use crate::services::InventorySummary;

const TYPE_HEADER: &str = "Type";
const COLOR_HEADER: &str = "Color";
const GRAMS_HEADER: &str = "Remaining (g)";

/// Format records as an aligned table
pub fn format_inventory_table(records: &[SpoolRecord]) -> String {
    if records.is_empty() {
        return "No filament in inventory.\n".to_string();
    }

    let type_width = records
        .iter()
        .map(|r| r.material_type.len())
        .max()
        .unwrap_or(0)
        .max(TYPE_HEADER.len());

    let color_width = records
        .iter()
        .map(|r| r.color.len())
        .max()
        .unwrap_or(0)
        .max(COLOR_HEADER.len());

    let mut output = String::new();
    output.push_str(&format!(
        "{:<type_width$}  {:<color_width$}  {:>13}\n",
        TYPE_HEADER,
        COLOR_HEADER,
        GRAMS_HEADER,
        type_width = type_width,
        color_width = color_width,
    ));

    output.push_str(&format!(
        "{:-<type_width$}  {:-<color_width$}  {:->13}\n",
        "",
        "",
        "",
        type_width = type_width,
        color_width = color_width,
    ));

    for record in records {
        output.push_str(&format!(
            "{:<type_width$}  {:<color_width$}  {:>13}\n",
            record.material_type,
            record.color,
            record.quantity_grams,
            type_width = type_width,
            color_width = color_width,
        ));
    }

    output
}

/// Format the low-stock notification table
pub fn format_low_stock(records: &[SpoolRecord], warning_level: i64) -> String {
    let mut output = format!("Low inventory notifications (at or below {} g):\n", warning_level);

    if records.is_empty() {
        output.push_str("  Nothing is running low.\n");
    } else {
        output.push_str(&format_inventory_table(records));
    }

    output
}

/// Question asked before a spool is removed
pub fn format_removal_question(record: &SpoolRecord) -> String {
    format!(
        "{} {} will be removed completely. This action cannot be undone. Continue?",
        record.color, record.material_type
    )
}

/// Format inventory totals
pub fn format_summary(summary: &InventorySummary) -> String {
    format!(
        "Spools: {}  Total: {} g  Low stock: {}  Warning level: {} g\n",
        summary.spool_count, summary.total_grams, summary.low_stock_count, summary.warning_level
    )
}
