//! User settings for FilamentCLI
//!
//! Manages user preferences: color theme, audit logging, and input
//! normalization.

use serde::{Deserialize, Serialize};

use super::paths::FilamentPaths;
use crate::error::FilamentError;

/// Color theme for the interactive interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// Green text on a dark blue background
    #[default]
    Classic,
    /// Use the terminal's own palette
    Default,
}

impl ThemeKind {
    /// Parse a theme name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Some(Self::Classic),
            "default" | "terminal" => Some(Self::Default),
            _ => None,
        }
    }
}

/// User settings for FilamentCLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Interactive interface theme
    #[serde(default)]
    pub theme: ThemeKind,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Whether material type and color are upper-cased before use
    #[serde(default = "default_true")]
    pub uppercase_input: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            theme: ThemeKind::default(),
            audit_enabled: true,
            uppercase_input: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FilamentPaths) -> Result<Self, FilamentError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FilamentError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FilamentError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FilamentPaths) -> Result<(), FilamentError> {
        paths.ensure_directories()?;

        crate::storage::file_io::write_json_atomic(paths.settings_file(), self)
    }
}
