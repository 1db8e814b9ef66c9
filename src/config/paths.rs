//! Path management for Paisa Tracker
//!
//! ## Path Resolution Order
//!
//! 1. `PAISA_TRACKER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `paisa-tracker`
//!    (`~/.config/paisa-tracker` on Linux, `%APPDATA%\paisa-tracker` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PaisaError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "PAISA_TRACKER_DATA_DIR";

/// Manages all paths used by Paisa Tracker
#[derive(Debug, Clone)]
pub struct PaisaPaths {
    /// Base directory for config and logs
    base_dir: PathBuf,
}

impl PaisaPaths {
    /// Create a new PaisaPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PaisaError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PaisaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("paisa.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PaisaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PaisaError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if settings have been written (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PaisaError> {
    ProjectDirs::from("", "", "paisa-tracker")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PaisaError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaisaPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("paisa.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("paisa");
        let paths = PaisaPaths::with_base_dir(base.clone());

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
