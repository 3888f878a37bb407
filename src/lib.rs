//! Splitify - personal expense tracker
//!
//! Records daily expenses in a local SQLite database and offers three views
//! over the full record set: a history table, a category distribution chart,
//! and on-demand analytics (a two-day spending forecast plus rule-based
//! suggestions). Both a one-shot CLI and a ratatui dashboard sit on top.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `logging`: tracing subscriber setup
//! - `models`: Expense records, categories and amount formatting
//! - `storage`: SQLite expense repository
//! - `analytics`: Forecast and suggestions
//! - `reports`: Category distribution chart
//! - `services`: Input parsing and validation before storage
//! - `display`: Plain-text rendering for the CLI
//! - `cli`: CLI command handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use splitify::config::paths::SplitifyPaths;
//! use splitify::storage::Storage;
//! use splitify::analytics::forecast_next_two_days;
//!
//! let storage = Storage::new(SplitifyPaths::new()?)?;
//! storage.initialize()?;
//! let forecast = forecast_next_two_days(&storage.expenses.fetch_all()?);
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{SplitifyError, SplitifyResult};
