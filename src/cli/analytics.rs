//! Chart and analytics CLI commands

use clap::Args;
use serde::Serialize;

use crate::analytics::{generate_personalized_suggestions, AnalyticsReport, ForecastBand};
use crate::config::settings::Settings;
use crate::display::{format_analytics, format_chart};
use crate::error::SplitifyResult;
use crate::reports::CategoryChart;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Arguments for `splitify analytics`
#[derive(Args, Debug, Default)]
pub struct AnalyticsArgs {
    /// Print the forecast and suggestions as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of `splitify analytics --json`
#[derive(Serialize, Debug)]
struct AnalyticsJson {
    forecast: Option<ForecastBand>,
    suggestions: Vec<String>,
}

/// Handle `splitify chart`
pub fn handle_chart_command(storage: &Storage, settings: &Settings) -> SplitifyResult<()> {
    let records = ExpenseService::new(storage).list()?;

    match CategoryChart::from_records(&records) {
        Some(chart) => print!("{}", format_chart(&chart, &settings.currency_symbol)),
        None => println!("No expenses recorded yet, nothing to chart."),
    }
    Ok(())
}

/// Handle `splitify analytics`
pub fn handle_analytics_command(
    storage: &Storage,
    settings: &Settings,
    args: AnalyticsArgs,
) -> SplitifyResult<()> {
    let records = ExpenseService::new(storage).list()?;
    let report = AnalyticsReport::generate(&records, &settings.currency_symbol);

    if args.json {
        let payload = match &report {
            Some(report) => AnalyticsJson {
                forecast: report.forecast.band().map(|band| band.rounded()),
                suggestions: report.suggestions.clone(),
            },
            None => AnalyticsJson {
                forecast: None,
                suggestions: generate_personalized_suggestions(
                    &records,
                    &settings.currency_symbol,
                ),
            },
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print!("{}", format_analytics(report.as_ref(), &settings.currency_symbol));
    Ok(())
}
