//! Path management for FilamentCLI
//!
//! Provides XDG-compliant path resolution for configuration, inventory data,
//! and exports.
//!
//! ## Path Resolution Order
//!
//! 1. `FILAMENT_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/filament-cli` or `~/.config/filament-cli`
//! 3. Windows: `%APPDATA%\filament-cli`

use std::path::PathBuf;

use crate::error::FilamentError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FILAMENT_CLI_DATA_DIR";

/// Manages all paths used by FilamentCLI
#[derive(Debug, Clone)]
pub struct FilamentPaths {
    /// Base directory for all FilamentCLI data
    base_dir: PathBuf,
}

impl FilamentPaths {
    /// Create a new FilamentPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FilamentError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FilamentPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/filament-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/filament-cli/Data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("Data")
    }

    /// Get the default export directory
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the inventory file
    pub fn inventory_file(&self) -> PathBuf {
        self.data_dir().join("Inventory.txt")
    }

    /// Get the path to the warning level file
    pub fn warning_level_file(&self) -> PathBuf {
        self.data_dir().join("Sentinel.txt")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), FilamentError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FilamentError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FilamentError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FilamentError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                FilamentError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("filament-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FilamentError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FilamentError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("filament-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FilamentPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("Data"));
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);

        let paths = FilamentPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FilamentPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FilamentPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.inventory_file(),
            temp_dir.path().join("Data").join("Inventory.txt")
        );
        assert_eq!(
            paths.warning_level_file(),
            temp_dir.path().join("Data").join("Sentinel.txt")
        );
    }
}
