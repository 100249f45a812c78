//! Core data models for FilamentCLI
//!
//! The inventory is a plain sequence of spool records; there are no generated
//! identifiers, only the `(material_type, color)` key.

pub mod record;

pub use record::{record_key, validate_key_field, Adjustment, SpoolRecord, UpdatedRecord};
