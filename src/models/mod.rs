//! Core data models for Splitify
//!
//! Expense records, the fixed category set, the id newtype and currency
//! formatting.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, ParseCategoryError};
pub use expense::{ExpenseRecord, ExpenseValidationError, NewExpense, MAX_AMOUNT};
pub use ids::ExpenseId;
pub use money::{format_amount, round2, DEFAULT_CURRENCY};
