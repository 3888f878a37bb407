//! Expense categories
//!
//! The set of categories is fixed. Storage keeps the name as TEXT, so parsing
//! back from a string is the only place an unknown value can appear.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Other,
}

impl Category {
    /// All categories in enumeration order
    pub const ALL: [Category; 6] = [
        Self::Food,
        Self::Transport,
        Self::Entertainment,
        Self::Shopping,
        Self::Bills,
        Self::Other,
    ];

    /// Get the display/storage name for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Other => "Other",
        }
    }

    /// All categories sorted by ascending label
    pub fn by_label() -> [Category; 6] {
        let mut all = Self::ALL;
        all.sort_by_key(|c| c.as_str());
        all
    }

    /// Position in enumeration order
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Next category in enumeration order (wraps around)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category in enumeration order (wraps around)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseCategoryError(needle.to_string()))
    }
}

/// A category name outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}'. Use one of: Food, Transport, Entertainment, Shopping, Bills, Other",
            self.0
        )
    }
}

impl std::error::Error for ParseCategoryError {}
