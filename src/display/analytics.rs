//! Forecast and suggestion formatting for the CLI

use super::report::section_heading;
use crate::analytics::{AnalyticsReport, Forecast};
use crate::models::format_amount;

/// Message shown when analytics are requested with no stored expenses
pub const ANALYTICS_NEED_DATA: &str = "Please add expenses before viewing analytics.";

/// Message shown when the forecast has nothing to work with
pub const FORECAST_NEED_DATA: &str = "Not enough data to forecast yet.";

/// Forecast section with both bounds rounded to 2 decimals
pub fn format_forecast(forecast: &Forecast, currency: &str) -> String {
    let mut output = section_heading("Forecast for Next 2 Days");

    match forecast.band() {
        Some(band) => {
            let band = band.rounded();
            output.push_str(&format!(
                "Lower Limit ({}): {}\n",
                currency,
                format_amount(band.lower, currency)
            ));
            output.push_str(&format!(
                "Upper Limit ({}): {}\n",
                currency,
                format_amount(band.upper, currency)
            ));
        }
        None => {
            output.push_str(FORECAST_NEED_DATA);
            output.push('\n');
        }
    }

    output
}

/// Suggestions as a bulleted list
pub fn format_suggestions(suggestions: &[String]) -> String {
    let mut output = section_heading("Personalized Suggestions");
    for suggestion in suggestions {
        output.push_str(&format!("  • {}\n", suggestion));
    }
    output
}

/// Both analytics sections, or the guidance line when there is no data
pub fn format_analytics(report: Option<&AnalyticsReport>, currency: &str) -> String {
    match report {
        Some(report) => format!(
            "{}\n{}",
            format_forecast(&report.forecast, currency),
            format_suggestions(&report.suggestions)
        ),
        None => format!("{}\n", ANALYTICS_NEED_DATA),
    }
}
