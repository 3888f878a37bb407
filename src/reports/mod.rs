//! Reports for Splitify
//!
//! Aggregations over the full record set that are shared by the CLI and the
//! dashboard.

pub mod chart;

pub use chart::{CategoryChart, ChartSlice};
