//! Expense CLI commands
//!
//! `add` records one expense, `list` prints the full history.

use chrono::Local;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_expense_table;
use crate::error::SplitifyResult;
use crate::models::format_amount;
use crate::services::{parse_new_expense, ExpenseService, INPUT_DATE_FORMAT};
use crate::storage::Storage;

/// Arguments for `splitify add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Category (Food, Transport, Entertainment, Shopping, Bills, Other)
    pub category: String,

    /// Amount spent (e.g., "250" or "1,250.50")
    #[arg(allow_negative_numbers = true)]
    pub amount: String,

    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Handle `splitify add`
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
) -> SplitifyResult<()> {
    let service = ExpenseService::new(storage);
    let date = args
        .date
        .unwrap_or_else(|| Local::now().date_naive().format(INPUT_DATE_FORMAT).to_string());

    let expense = parse_new_expense(&date, &args.category, &args.amount)?;
    service.add(&expense)?;

    println!("Expense added successfully!");
    println!(
        "  {}  {}  {}",
        expense.date.format(&settings.date_format),
        expense.category,
        format_amount(expense.amount, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `splitify list`
pub fn handle_list_command(storage: &Storage, settings: &Settings) -> SplitifyResult<()> {
    let records = ExpenseService::new(storage).list()?;

    println!("Expense History");
    println!(
        "{}",
        format_expense_table(&records, &settings.currency_symbol, &settings.date_format)
    );
    if !records.is_empty() {
        println!("{} expense(s)", records.len());
    }
    Ok(())
}
