//! Expense history formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{format_amount, ExpenseRecord};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn from_record(record: &ExpenseRecord, currency: &str, date_format: &str) -> Self {
        Self {
            id: record.id.get(),
            date: record.date.format(date_format).to_string(),
            category: record.category.to_string(),
            amount: format_amount(record.amount, currency),
        }
    }
}

/// Render the expense history as a table, one row per record in storage order
pub fn format_expense_table(records: &[ExpenseRecord], currency: &str, date_format: &str) -> String {
    if records.is_empty() {
        return "No expenses recorded yet.\n\nAdd one with 'splitify add <CATEGORY> <AMOUNT> [--date YYYY-MM-DD]'."
            .to_string();
    }

    let rows: Vec<ExpenseRow> = records
        .iter()
        .map(|r| ExpenseRow::from_record(r, currency, date_format))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_history() {
        let output = format_expense_table(&[], "₹", "%Y-%m-%d");
        assert!(output.starts_with("No expenses recorded yet."));
        assert!(output.contains("splitify add <CATEGORY> <AMOUNT> [--date YYYY-MM-DD]"));
    }

    #[test]
    fn test_history_rows() {
        let records = vec![
            ExpenseRecord {
                id: ExpenseId::new(1),
                date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                category: Category::Transport,
                amount: 1250.0,
            },
            ExpenseRecord {
                id: ExpenseId::new(2),
                date: NaiveDate::from_ymd_opt(2025, 1, 16).unwrap(),
                category: Category::Food,
                amount: 80.5,
            },
        ];

        let output = format_expense_table(&records, "₹", "%Y-%m-%d");
        assert!(output.contains("Category"));
        assert!(output.contains("2025-01-15"));
        assert!(output.contains("Transport"));
        assert!(output.contains("₹1,250.00"));
        assert!(output.contains("₹80.50"));

        let first = output.find("Transport").unwrap();
        let second = output.find("Food").unwrap();
        assert!(first < second);
    }
}
