//! Expense service
//!
//! Sits between the interface layer and storage: turns raw form/CLI input into
//! a validated `NewExpense` and rejects bad rows before they are written.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{SplitifyError, SplitifyResult};
use crate::models::{Category, ExpenseRecord, NewExpense};
use crate::storage::Storage;

/// Date format accepted for input
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Service for recording and reading expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and store one expense
    pub fn add(&self, expense: &NewExpense) -> SplitifyResult<()> {
        if let Err(e) = expense.validate() {
            warn!(error = %e, "rejected expense");
            return Err(SplitifyError::Validation(e.to_string()));
        }

        self.storage
            .expenses
            .insert(expense.date, expense.category, expense.amount)?;

        debug!(
            date = %expense.date,
            category = %expense.category,
            amount = expense.amount,
            "expense added"
        );
        Ok(())
    }

    /// Parse raw input, validate it and store it
    pub fn add_from_input(&self, date: &str, category: &str, amount: &str) -> SplitifyResult<()> {
        let expense = parse_new_expense(date, category, amount)?;
        self.add(&expense)
    }

    /// The full record set in insertion order
    pub fn list(&self) -> SplitifyResult<Vec<ExpenseRecord>> {
        self.storage.expenses.fetch_all()
    }
}

/// Build a `NewExpense` from raw strings
pub fn parse_new_expense(date: &str, category: &str, amount: &str) -> SplitifyResult<NewExpense> {
    let expense = NewExpense::new(parse_date(date)?, parse_category(category)?, parse_amount(amount)?);
    expense
        .validate()
        .map_err(|e| SplitifyError::Validation(e.to_string()))?;
    Ok(expense)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> SplitifyResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), INPUT_DATE_FORMAT).map_err(|_| {
        SplitifyError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s.trim()))
    })
}

/// Parse one of the fixed category names
pub fn parse_category(s: &str) -> SplitifyResult<Category> {
    s.parse::<Category>()
        .map_err(|e| SplitifyError::Validation(e.to_string()))
}

/// Parse a non-negative amount. Thousands separators are accepted.
pub fn parse_amount(s: &str) -> SplitifyResult<f64> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(SplitifyError::Validation("Enter an amount".into()));
    }

    let amount: f64 = cleaned.parse().map_err(|_| {
        SplitifyError::Validation(format!(
            "Invalid amount format: '{}'. Use a number like '250' or '99.50'",
            s.trim()
        ))
    })?;

    if !amount.is_finite() {
        return Err(SplitifyError::Validation("Amount must be a finite number".into()));
    }

    if amount < 0.0 {
        return Err(SplitifyError::Validation(format!(
            "Amount cannot be negative (got {})",
            amount
        )));
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SplitifyPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitifyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.initialize().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_and_list() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add_from_input("2025-02-01", "food", "1,250.50").unwrap();
        service.add_from_input("2025-02-02", "Bills", "0").unwrap();

        let records = service.list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, Category::Food);
        assert_eq!(records[0].amount, 1250.5);
        assert_eq!(records[1].category, Category::Bills);
        assert_eq!(records[1].amount, 0.0);
    }

    #[test]
    fn test_negative_amount_never_written() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = NewExpense::new(
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            Category::Food,
            -5.0,
        );
        let err = service.add(&expense).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service
            .add_from_input("2025-02-01", "Travel", "10")
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_oversized_amount_never_written() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service
            .add_from_input("2025-02-01", "Bills", "1e308")
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100").unwrap(), 100.0);
        assert_eq!(parse_amount(" 2,500.75 ").unwrap(), 2500.75);
        assert!(parse_amount("").unwrap_err().is_validation());
        assert!(parse_amount("abc").unwrap_err().is_validation());
        assert!(parse_amount("-1").unwrap_err().is_validation());
        assert!(parse_amount("inf").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-12-31").unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
        assert!(parse_date("31/12/2025").unwrap_err().is_validation());
    }
}
