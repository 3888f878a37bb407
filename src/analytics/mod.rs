//! Analytics over the full record set
//!
//! Pure functions with no state: a short-horizon forecast band and a list of
//! rule-based suggestions.

pub mod forecast;
pub mod suggestions;

pub use forecast::{forecast_next_two_days, Forecast, ForecastBand, FORECAST_WINDOW};
pub use suggestions::{
    category_advice, generate_personalized_suggestions, SpendingSummary, GENERAL_TIPS,
    NO_DATA_MESSAGE,
};

use crate::models::ExpenseRecord;

/// Forecast and suggestions computed together for one analytics request
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsReport {
    pub forecast: Forecast,
    pub suggestions: Vec<String>,
}

impl AnalyticsReport {
    /// Run both analytics over the record set. `None` when it is empty.
    pub fn generate(records: &[ExpenseRecord], currency: &str) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        Some(Self {
            forecast: forecast_next_two_days(records),
            suggestions: generate_personalized_suggestions(records, currency),
        })
    }
}
