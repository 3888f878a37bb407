//! Strongly-typed row identifiers
//!
//! SQLite assigns expense ids; the newtype keeps them from being mixed up
//! with counts or indexes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored expense (SQLite rowid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a raw rowid
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw rowid
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ExpenseId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
