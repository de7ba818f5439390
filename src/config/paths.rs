//! Path management for Budget Buddy
//!
//! Provides XDG-compliant path resolution for configuration, month data, and exports.
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_BUDDY_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budget-buddy` or `~/.config/budget-buddy`
//! 3. Windows: `%APPDATA%\budget-buddy`

use std::path::PathBuf;

use crate::error::BuddyError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BUDGET_BUDDY_DATA_DIR";

/// Manages all paths used by Budget Buddy
#[derive(Debug, Clone)]
pub struct BuddyPaths {
    /// Base directory for all Budget Buddy data
    base_dir: PathBuf,
}

impl BuddyPaths {
    /// Create a new BuddyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BuddyError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BuddyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/budget-buddy/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the directory holding one JSON file per month
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("budget_data")
    }

    /// Get the default directory for CSV exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BuddyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BuddyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BuddyError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BuddyError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                BuddyError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("budget-buddy"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BuddyError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BuddyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budget-buddy"))
}
