//! Spool record model
//!
//! A spool record is one line of the inventory file: material type, color,
//! and the grams of filament remaining. Records are identified by the
//! `(material_type, color)` pair, which is not required to be unique.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FilamentError, FilamentResult};

/// Separator between fields of an inventory line
pub const FIELD_SEPARATOR: char = ',';

/// Number of meaningful fields on an inventory line
const FIELD_COUNT: usize = 3;

/// One entry of the filament inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpoolRecord {
    /// Material type (e.g., "PLA", "PETG")
    pub material_type: String,

    /// Filament color (e.g., "WHITE")
    pub color: String,

    /// Grams of filament on hand
    pub quantity_grams: i64,
}

impl SpoolRecord {
    /// Create a new record
    pub fn new(material_type: impl Into<String>, color: impl Into<String>, quantity_grams: i64) -> Self {
        Self {
            material_type: material_type.into(),
            color: color.into(),
            quantity_grams,
        }
    }

    /// The record written to a fresh inventory file
    pub fn seed() -> Self {
        Self::new("PLA", "WHITE", 1000)
    }

    /// Exact, case-sensitive key comparison
    pub fn matches(&self, material_type: &str, color: &str) -> bool {
        self.material_type == material_type && self.color == color
    }

    /// Human-readable key used in audit entries
    pub fn key(&self) -> String {
        record_key(&self.material_type, &self.color)
    }

    /// Whether this record is at or below the warning level
    pub fn is_low_stock(&self, threshold_grams: i64) -> bool {
        self.quantity_grams <= threshold_grams
    }

    /// Canonical line form, without the line terminator
    pub fn to_line(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}",
            self.material_type,
            self.color,
            self.quantity_grams,
            sep = FIELD_SEPARATOR
        )
    }

    /// Parse a single non-blank inventory line
    ///
    /// The line must hold three comma-separated fields, optionally followed by
    /// the empty field left by the trailing comma. Whitespace around each field
    /// is dropped. `line_number` is 1-based and only used for error reporting.
    pub fn parse_line(line: &str, line_number: usize) -> FilamentResult<Self> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();

        if fields.len() < FIELD_COUNT {
            return Err(FilamentError::malformed(
                line_number,
                line,
                format!("expected at least {} fields, found {}", FIELD_COUNT, fields.len()),
            ));
        }

        if fields[FIELD_COUNT..].iter().any(|field| !field.is_empty()) {
            return Err(FilamentError::malformed(
                line_number,
                line,
                format!("unexpected data after field {}", FIELD_COUNT),
            ));
        }

        let quantity_grams = fields[2].parse::<i64>().map_err(|_| {
            FilamentError::malformed(line_number, line, "quantity is not an integer")
        })?;

        Ok(Self::new(fields[0], fields[1], quantity_grams))
    }

    /// Validate a record before it is written
    pub fn validate(&self) -> FilamentResult<()> {
        validate_key_field("Material type", &self.material_type)?;
        validate_key_field("Color", &self.color)?;

        if self.quantity_grams < 0 {
            return Err(FilamentError::Validation(format!(
                "Quantity cannot be negative: {}",
                self.quantity_grams
            )));
        }

        Ok(())
    }
}

impl fmt::Display for SpoolRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({} g)", self.color, self.material_type, self.quantity_grams)
    }
}

/// Format a `(material_type, color)` pair as `TYPE/COLOR`
pub fn record_key(material_type: &str, color: &str) -> String {
    format!("{}/{}", material_type, color)
}

/// Check that a key field can be stored on a single inventory line
pub fn validate_key_field(name: &str, value: &str) -> FilamentResult<()> {
    if value.trim().is_empty() {
        return Err(FilamentError::Validation(format!("{} cannot be empty", name)));
    }
    if value.contains(FIELD_SEPARATOR) {
        return Err(FilamentError::Validation(format!(
            "{} cannot contain '{}'",
            name, FIELD_SEPARATOR
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(FilamentError::Validation(format!(
            "{} cannot contain line breaks",
            name
        )));
    }
    Ok(())
}

/// A change to the quantity of an existing record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Add grams to the record
    Add(i64),
    /// Remove grams from the record, never going below zero
    Subtract(i64),
}

impl Adjustment {
    /// Build an adjustment from a delta and a direction flag
    pub fn new(delta: i64, is_addition: bool) -> Self {
        if is_addition {
            Self::Add(delta)
        } else {
            Self::Subtract(delta)
        }
    }

    /// The unsigned amount of the change
    pub fn delta(&self) -> i64 {
        match self {
            Self::Add(delta) | Self::Subtract(delta) => *delta,
        }
    }

    /// Reject negative deltas
    pub fn validate(&self) -> FilamentResult<()> {
        if self.delta() < 0 {
            return Err(FilamentError::Validation(format!(
                "Adjustment amount cannot be negative: {}",
                self.delta()
            )));
        }
        Ok(())
    }

    /// Apply the adjustment to a quantity
    pub fn apply(&self, quantity_grams: i64) -> i64 {
        match self {
            Self::Add(delta) => quantity_grams.saturating_add(*delta),
            Self::Subtract(delta) => quantity_grams.saturating_sub(*delta).max(0),
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(delta) => write!(f, "+{} g", delta),
            Self::Subtract(delta) => write!(f, "-{} g", delta),
        }
    }
}

/// A record before and after an adjustment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedRecord {
    pub before: SpoolRecord,
    pub after: SpoolRecord,
}
