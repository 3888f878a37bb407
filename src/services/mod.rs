//! Service layer for Splitify
//!
//! The service layer provides validation and business rules on top of the
//! storage layer.

pub mod expense;

pub use expense::{
    parse_amount, parse_category, parse_date, parse_new_expense, ExpenseService, INPUT_DATE_FORMAT,
};
