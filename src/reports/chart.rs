//! Category distribution chart
//!
//! Groups records by category and works out each category's share of total
//! spending. Rendering is left to the display and TUI layers.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Category, ExpenseRecord};

/// One category's share of the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    /// Category label
    pub category: Category,
    /// Summed amount for the category
    pub total: f64,
    /// Share of the overall total, 0-100
    pub percentage: f64,
    /// Number of records in the category
    pub count: usize,
}

/// Category-wise expense distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChart {
    /// Slices in ascending category label order
    pub slices: Vec<ChartSlice>,
    /// Sum over all slices
    pub total: f64,
}

impl CategoryChart {
    /// Build the chart for a record set
    ///
    /// Returns `None` when there are no records. Only categories that appear in
    /// the records get a slice. If every amount is zero, all slices are 0%.
    pub fn from_records(records: &[ExpenseRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut sums: HashMap<Category, (f64, usize)> = HashMap::new();
        for record in records {
            let entry = sums.entry(record.category).or_insert((0.0, 0));
            entry.0 += record.amount;
            entry.1 += 1;
        }

        let total: f64 = sums.values().map(|(sum, _)| sum).sum();

        let slices = Category::by_label()
            .into_iter()
            .filter_map(|category| {
                let (sum, count) = sums.get(&category).copied()?;
                let percentage = if total > 0.0 {
                    sum / total * 100.0
                } else {
                    0.0
                };
                Some(ChartSlice {
                    category,
                    total: sum,
                    percentage,
                    count,
                })
            })
            .collect();

        Some(Self { slices, total })
    }

    /// Slice for a category, if it has any records
    pub fn slice(&self, category: Category) -> Option<&ChartSlice> {
        self.slices.iter().find(|s| s.category == category)
    }

    /// Largest slice total, used to scale bars
    pub fn max_total(&self) -> f64 {
        self.slices.iter().map(|s| s.total).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use chrono::NaiveDate;

    fn record(id: i64, category: Category, amount: f64) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::new(id),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            category,
            amount,
        }
    }

    #[test]
    fn test_empty_records_have_no_chart() {
        assert!(CategoryChart::from_records(&[]).is_none());
    }

    #[test]
    fn test_food_share() {
        let records = vec![
            record(1, Category::Food, 100.0),
            record(2, Category::Food, 50.0),
            record(3, Category::Other, 25.0),
        ];
        let chart = CategoryChart::from_records(&records).unwrap();

        assert_eq!(chart.total, 175.0);
        assert_eq!(chart.slices.len(), 2);

        let food = chart.slice(Category::Food).unwrap();
        assert_eq!(food.total, 150.0);
        assert_eq!(food.count, 2);
        assert!((food.percentage - 85.714).abs() < 0.01);

        let other = chart.slice(Category::Other).unwrap();
        assert!((other.percentage - 14.286).abs() < 0.01);
        assert_eq!(chart.max_total(), 150.0);
    }

    #[test]
    fn test_slices_sorted_by_label() {
        let records = vec![
            record(1, Category::Transport, 10.0),
            record(2, Category::Bills, 10.0),
            record(3, Category::Food, 10.0),
            record(4, Category::Entertainment, 10.0),
        ];
        let chart = CategoryChart::from_records(&records).unwrap();
        let order: Vec<Category> = chart.slices.iter().map(|s| s.category).collect();

        assert_eq!(
            order,
            vec![
                Category::Bills,
                Category::Entertainment,
                Category::Food,
                Category::Transport
            ]
        );
    }

    #[test]
    fn test_zero_total_gives_zero_percentages() {
        let records = vec![record(1, Category::Food, 0.0), record(2, Category::Bills, 0.0)];
        let chart = CategoryChart::from_records(&records).unwrap();

        assert_eq!(chart.total, 0.0);
        assert!(chart.slices.iter().all(|s| s.percentage == 0.0));
    }
}
