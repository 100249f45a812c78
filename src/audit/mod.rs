//! Change history for FilamentCLI
//!
//! Every saved change to the inventory or the warning level is appended as
//! one JSON line. `filament history` reads it back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Change, Operation};
pub use logger::AuditLogger;
