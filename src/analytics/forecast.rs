//! Two-day spending forecast
//!
//! A one-sigma band around the mean of the most recent records. The window is
//! over raw rows in insertion order, not over calendar days.

use serde::Serialize;

use crate::models::{round2, ExpenseRecord};

/// Number of most recent records the forecast looks at
pub const FORECAST_WINDOW: usize = 7;

/// Expected spending range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastBand {
    pub lower: f64,
    pub upper: f64,
}

impl ForecastBand {
    /// Both bounds rounded to 2 decimal places for display
    pub fn rounded(&self) -> Self {
        Self {
            lower: round2(self.lower),
            upper: round2(self.upper),
        }
    }
}

/// Result of [`forecast_next_two_days`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Forecast {
    /// No records to forecast from
    InsufficientData,
    Band(ForecastBand),
}

impl Forecast {
    /// The band, if there is one
    pub fn band(&self) -> Option<ForecastBand> {
        match self {
            Self::Band(band) => Some(*band),
            Self::InsufficientData => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::InsufficientData)
    }
}

/// Forecast the spending range for the next two days
///
/// Takes the last [`FORECAST_WINDOW`] records (fewer if fewer exist) and
/// returns `[max(0, mean - std), mean + std]` using the sample standard
/// deviation. A single record has no spread, so its std is taken as 0.
pub fn forecast_next_two_days(records: &[ExpenseRecord]) -> Forecast {
    if records.is_empty() {
        return Forecast::InsufficientData;
    }

    let start = records.len().saturating_sub(FORECAST_WINDOW);
    let window: Vec<f64> = records[start..].iter().map(|r| r.amount).collect();

    let avg = mean(&window);
    let std = sample_std_dev(&window, avg);

    Forecast::Band(ForecastBand {
        lower: (avg - std).max(0.0),
        upper: avg + std,
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard deviation with Bessel's correction (n - 1)
fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId};
    use chrono::NaiveDate;

    fn records(amounts: &[f64]) -> Vec<ExpenseRecord> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| ExpenseRecord {
                id: ExpenseId::new(i as i64 + 1),
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                category: Category::Food,
                amount: *amount,
            })
            .collect()
    }

    fn band(forecast: Forecast) -> ForecastBand {
        forecast.band().expect("expected a forecast band")
    }

    #[test]
    fn test_empty_is_insufficient() {
        let forecast = forecast_next_two_days(&[]);
        assert_eq!(forecast, Forecast::InsufficientData);
        assert!(forecast.is_insufficient());
        assert!(forecast.band().is_none());
    }

    #[test]
    fn test_constant_amounts_have_zero_spread() {
        let result = band(forecast_next_two_days(&records(&[100.0; 7])));
        assert_eq!(result.lower, 100.0);
        assert_eq!(result.upper, 100.0);
    }

    #[test]
    fn test_single_record_uses_zero_std() {
        let result = band(forecast_next_two_days(&records(&[50.0])));
        assert_eq!(result.lower, 50.0);
        assert_eq!(result.upper, 50.0);
    }

    #[test]
    fn test_sample_std_dev() {
        let amounts = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let result = band(forecast_next_two_days(&records(&amounts[1..])));

        let window = &amounts[1..];
        let avg = window.iter().sum::<f64>() / 7.0;
        let var = window.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / 6.0;
        assert!((result.upper - (avg + var.sqrt())).abs() < 1e-9);
        assert!((result.lower - (avg - var.sqrt())).abs() < 1e-9);
    }

    #[test]
    fn test_window_uses_last_seven_records() {
        let mut amounts = vec![10_000.0];
        amounts.extend([100.0; 7]);
        let result = band(forecast_next_two_days(&records(&amounts)));
        assert_eq!(result.lower, 100.0);
        assert_eq!(result.upper, 100.0);
    }

    #[test]
    fn test_lower_bound_clamped_at_zero() {
        let result = band(forecast_next_two_days(&records(&[0.0, 100.0])));
        assert_eq!(result.lower, 0.0);
        assert!((result.upper - (50.0 + 5000.0_f64.sqrt())).abs() < 1e-9);
    }

    #[test]
    fn test_rounded_band() {
        let result = band(forecast_next_two_days(&records(&[0.0, 100.0]))).rounded();
        assert_eq!(result.lower, 0.0);
        assert_eq!(result.upper, 120.71);
    }
}
