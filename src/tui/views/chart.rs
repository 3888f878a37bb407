//! Category distribution panel
//!
//! A single proportion strip coloured by category, followed by one legend
//! line per slice with its share and total.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_percentage;
use crate::models::format_amount;
use crate::reports::CategoryChart;
use crate::tui::app::App;
use crate::tui::theme::Palette;

/// Render the chart panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette;
    let block = Block::default()
        .title(" Category Distribution ")
        .title_style(Style::default().fg(palette.accent))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let Some(chart) = app.chart.as_ref() else {
        frame.render_widget(block, area);
        return;
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let currency = &app.settings.currency_symbol;

    let mut lines = vec![
        Line::from(Span::styled(
            "Category-wise Expense Distribution",
            Style::default()
                .fg(palette.heading)
                .add_modifier(Modifier::BOLD),
        )),
        proportion_strip(chart, &palette, inner_width),
        Line::from(""),
    ];

    for slice in &chart.slices {
        lines.push(Line::from(vec![
            Span::styled(
                "■ ",
                Style::default().fg(palette.category_color(slice.category)),
            ),
            Span::styled(
                format!("{:<14}", slice.category.as_str()),
                Style::default().fg(palette.text),
            ),
            Span::styled(
                format!("{:>6}", format_percentage(slice.percentage)),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {:>12}", format_amount(slice.total, currency)),
                Style::default().fg(palette.muted),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Segment widths for each slice, summing to exactly `width`
///
/// Segments are rounded from the running cumulative share so rounding errors
/// never accumulate. A zero total yields no filled segments.
pub fn segment_widths(chart: &CategoryChart, width: usize) -> Vec<usize> {
    if chart.total <= 0.0 {
        return vec![0; chart.slices.len()];
    }

    let mut widths = Vec::with_capacity(chart.slices.len());
    let mut cumulative = 0.0;
    let mut used = 0;
    for slice in &chart.slices {
        cumulative += slice.total;
        let end = ((cumulative / chart.total) * width as f64).round() as usize;
        let end = end.min(width);
        widths.push(end.saturating_sub(used));
        used = used.max(end);
    }
    widths
}

fn proportion_strip(chart: &CategoryChart, palette: &Palette, width: usize) -> Line<'static> {
    let widths = segment_widths(chart, width);
    let filled: usize = widths.iter().sum();

    let mut spans: Vec<Span<'static>> = chart
        .slices
        .iter()
        .zip(widths)
        .filter(|(_, w)| *w > 0)
        .map(|(slice, w)| {
            Span::styled(
                "█".repeat(w),
                Style::default().fg(palette.category_color(slice.category)),
            )
        })
        .collect();

    if filled < width {
        spans.push(Span::styled(
            "░".repeat(width - filled),
            Style::default().fg(palette.border),
        ));
    }

    Line::from(spans)
}
