//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod analytics;
pub mod expense;

pub use analytics::{handle_analytics_command, handle_chart_command, AnalyticsArgs};
pub use expense::{handle_add_command, handle_list_command, AddArgs};
