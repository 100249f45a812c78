//! FilamentCLI - Terminal-based 3D printer filament inventory
//!
//! This library provides the core functionality for the FilamentCLI
//! inventory tracker. Spools are kept one per line in a plain text file as
//! `TYPE,COLOR,GRAMS,`, and a separate file holds the low-stock warning level.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Spool records and quantity adjustments
//! - `storage`: Flat-file inventory store and warning level setting
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Plain-text formatting for CLI output
//! - `export`: CSV, JSON, and YAML export
//! - `cli`: Subcommand handlers
//! - `tui`: Interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use filament::config::{paths::FilamentPaths, settings::Settings};
//! use filament::services::InventoryService;
//! use filament::storage::Storage;
//!
//! let paths = FilamentPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let low = InventoryService::new(&storage, &settings).low_stock()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{FilamentError, FilamentResult};
