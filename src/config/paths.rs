//! Path management for Splitify
//!
//! Resolves where the settings file, the expense database and the log file live.
//!
//! ## Path Resolution Order
//!
//! 1. `SPLITIFY_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `splitify`
//!    (`~/.config/splitify` on Linux, `%APPDATA%\splitify` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::SplitifyError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SPLITIFY_DATA_DIR";

/// File name of the SQLite expense database
pub const DATABASE_FILE_NAME: &str = "expense_data.db";

/// Manages all paths used by Splitify
#[derive(Debug, Clone)]
pub struct SplitifyPaths {
    /// Base directory for all Splitify data
    base_dir: PathBuf,
}

impl SplitifyPaths {
    /// Create a new SplitifyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, SplitifyError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SplitifyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the SQLite expense database
    pub fn database_file(&self) -> PathBuf {
        self.data_dir().join(DATABASE_FILE_NAME)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("splitify.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SplitifyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SplitifyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SplitifyError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Splitify has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SplitifyError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| SplitifyError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("splitify"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitifyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitifyPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitifyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.database_file(),
            temp_dir.path().join("data").join("expense_data.db")
        );
        assert_eq!(paths.log_file(), temp_dir.path().join("splitify.log"));
    }
}
