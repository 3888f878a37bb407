//! Storage layer for Splitify
//!
//! A single SQLite file holds the append-only `expenses` table.

pub mod expenses;

pub use expenses::ExpenseRepository;

use crate::config::paths::SplitifyPaths;
use crate::error::SplitifyError;

/// Main storage coordinator that provides access to the repositories
pub struct Storage {
    paths: SplitifyPaths,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SplitifyPaths) -> Result<Self, SplitifyError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.database_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SplitifyPaths {
        &self.paths
    }

    /// Ensure the schema exists. Safe to call on every start.
    pub fn initialize(&self) -> Result<(), SplitifyError> {
        self.expenses.initialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitifyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.initialize().unwrap();
        assert!(storage.paths().database_file().exists());
        assert!(storage.expenses.fetch_all().unwrap().is_empty());
    }
}
