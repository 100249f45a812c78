//! Service layer for FilamentCLI
//!
//! The service layer provides business logic on top of the storage layer,
//! handling normalization, validation, and audit logging.

pub mod inventory;

pub use inventory::{InventoryService, InventorySummary};
