//! Expense records
//!
//! An `ExpenseRecord` is what storage hands back; a `NewExpense` is what the
//! interface layer builds from user input before it is written.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;

/// A stored expense. Records are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Assigned by storage, never changes
    pub id: ExpenseId,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Expense category
    pub category: Category,

    /// Amount in currency units, never negative
    pub amount: f64,
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {:.2}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Largest amount a single expense may carry
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// An expense that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: Category,
    pub amount: f64,
}

impl NewExpense {
    pub fn new(date: NaiveDate, category: Category, amount: f64) -> Self {
        Self {
            date,
            category,
            amount,
        }
    }

    /// Validate the expense before it reaches storage
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount);
        }

        if self.amount < 0.0 {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        if self.amount > MAX_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        Ok(())
    }
}

/// Validation errors for new expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    NegativeAmount(f64),
    NonFiniteAmount,
    AmountTooLarge(f64),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative (got {})", amount)
            }
            Self::NonFiniteAmount => write!(f, "Amount must be a finite number"),
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_valid_expense() {
        let expense = NewExpense::new(date(), Category::Food, 250.0);
        assert!(expense.validate().is_ok());

        let zero = NewExpense::new(date(), Category::Other, 0.0);
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let expense = NewExpense::new(date(), Category::Bills, -1.0);
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NegativeAmount(-1.0))
        );
    }

    #[test]
    fn test_nan_amount_rejected() {
        let expense = NewExpense::new(date(), Category::Bills, f64::NAN);
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NonFiniteAmount)
        );
    }

    #[test]
    fn test_amount_above_maximum_rejected() {
        let at_max = NewExpense::new(date(), Category::Bills, MAX_AMOUNT);
        assert!(at_max.validate().is_ok());

        let huge = NewExpense::new(date(), Category::Bills, 1e308);
        assert_eq!(
            huge.validate(),
            Err(ExpenseValidationError::AmountTooLarge(1e308))
        );
    }

    #[test]
    fn test_record_display() {
        let record = ExpenseRecord {
            id: ExpenseId::new(3),
            date: date(),
            category: Category::Transport,
            amount: 42.5,
        };
        assert_eq!(record.to_string(), "#3 2025-01-15 Transport 42.50");
    }
}
