//! Personalized spending suggestions
//!
//! Three statistics lines, one advisory per category present in the record
//! set, then two general tips. The text is fixed; only the numbers and the top
//! category vary.

use std::collections::HashMap;

use crate::models::{format_amount, Category, ExpenseRecord};

/// Message returned when there is nothing to analyze
pub const NO_DATA_MESSAGE: &str = "No data yet to analyze.";

/// Tips appended to every non-empty result
pub const GENERAL_TIPS: [&str; 2] = [
    "Keep 20% of your monthly income as savings buffer.",
    "Try reducing expenses in your highest-spending category by 10% next month.",
];

/// Static advisory for a category
pub fn category_advice(category: Category) -> &'static str {
    match category {
        Category::Food => "Try planning meals weekly to reduce frequent small food purchases.",
        Category::Transport => "Consider using public transport or carpooling to save fuel costs.",
        Category::Entertainment => {
            "Set a monthly entertainment budget to avoid overspending on leisure."
        }
        Category::Shopping => {
            "Track your shopping habits; wait 24 hours before making non-essential purchases."
        }
        Category::Bills => "Review monthly bills and look for subscription plans you no longer use.",
        Category::Other => {
            "Review 'Other' expenses to categorize them properly and find hidden costs."
        }
    }
}

/// Summary numbers the statistics messages are built from
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    pub average: f64,
    pub total: f64,
    pub top_category: Category,
}

impl SpendingSummary {
    /// Compute average, total and top category. `None` for an empty set.
    ///
    /// Category totals are scanned in ascending label order and the first
    /// maximum wins, so ties go to the alphabetically smallest label.
    pub fn from_records(records: &[ExpenseRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut totals: HashMap<Category, f64> = HashMap::new();
        for record in records {
            *totals.entry(record.category).or_insert(0.0) += record.amount;
        }

        let mut top: Option<(Category, f64)> = None;
        for category in Category::by_label() {
            if let Some(&sum) = totals.get(&category) {
                match top {
                    Some((_, best)) if sum <= best => {}
                    _ => top = Some((category, sum)),
                }
            }
        }

        let total: f64 = records.iter().map(|r| r.amount).sum();
        let (top_category, _) = top?;

        Some(Self {
            average: total / records.len() as f64,
            total,
            top_category,
        })
    }
}

/// Build the ordered suggestion list for a record set, with amounts in `currency`
pub fn generate_personalized_suggestions(
    records: &[ExpenseRecord],
    currency: &str,
) -> Vec<String> {
    let Some(summary) = SpendingSummary::from_records(records) else {
        return vec![NO_DATA_MESSAGE.to_string()];
    };

    let mut suggestions = vec![
        format!(
            "Your average daily expense so far is {}.",
            format_amount(summary.average, currency)
        ),
        format!("You've spent the most on {}.", summary.top_category),
        format!(
            "Your total tracked spending is {}.",
            format_amount(summary.total, currency)
        ),
    ];

    for category in Category::ALL {
        if records.iter().any(|r| r.category == category) {
            suggestions.push(category_advice(category).to_string());
        }
    }

    suggestions.extend(GENERAL_TIPS.iter().map(|tip| tip.to_string()));
    suggestions
}
