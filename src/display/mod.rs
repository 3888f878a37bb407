//! Display formatting for terminal output
//!
//! Turns records, the category chart and analytics results into plain text for
//! the CLI subcommands.

pub mod analytics;
pub mod chart;
pub mod expense;
pub mod report;

pub use analytics::{
    format_analytics, format_forecast, format_suggestions, ANALYTICS_NEED_DATA, FORECAST_NEED_DATA,
};
pub use chart::format_chart;
pub use expense::format_expense_table;
pub use report::{format_bar, format_percentage, truncate};
