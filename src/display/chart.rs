//! Category chart formatting for the CLI

use super::report::{format_bar, format_percentage, section_heading};
use crate::models::format_amount;
use crate::reports::CategoryChart;

const BAR_WIDTH: usize = 30;

/// Render the category distribution as labelled horizontal bars
pub fn format_chart(chart: &CategoryChart, currency: &str) -> String {
    let mut output = section_heading("Category-wise Expense Distribution");
    let max = chart.max_total();

    for slice in &chart.slices {
        output.push_str(&format!(
            "{:<14} {} {:>6}  {:>14}\n",
            slice.category.as_str(),
            format_bar(slice.total, max, BAR_WIDTH),
            format_percentage(slice.percentage),
            format_amount(slice.total, currency)
        ));
    }

    output.push_str(&format!(
        "{:<14} {:>w$}  {:>14}\n",
        "Total",
        "",
        format_amount(chart.total, currency),
        w = BAR_WIDTH + 7
    ));
    output
}
