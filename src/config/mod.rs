//! Configuration module for FilamentCLI
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FilamentPaths;
pub use settings::{Settings, ThemeKind};
