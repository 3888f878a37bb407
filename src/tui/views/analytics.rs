//! Analytics panel
//!
//! Forecast band on the left, suggestions on the right. Computed only when the
//! user asks for it.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::analytics::AnalyticsReport;
use crate::display::{ANALYTICS_NEED_DATA, FORECAST_NEED_DATA};
use crate::models::format_amount;
use crate::tui::app::{AnalyticsPanel, App};
use crate::tui::theme::Palette;

/// Render the analytics panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette;

    match &app.analytics {
        AnalyticsPanel::Hidden => {}
        AnalyticsPanel::NeedData => {
            let block = panel_block(" Analytics ", &palette);
            let text = Paragraph::new(ANALYTICS_NEED_DATA)
                .block(block)
                .style(Style::default().fg(palette.heading));
            frame.render_widget(text, area);
        }
        AnalyticsPanel::Ready(report) => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(36), Constraint::Min(20)])
                .split(area);

            render_forecast(frame, report, app, chunks[0]);
            render_suggestions(frame, report, &palette, chunks[1]);
        }
    }
}

fn panel_block(title: &'static str, palette: &Palette) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
}

fn render_forecast(frame: &mut Frame, report: &AnalyticsReport, app: &App, area: Rect) {
    let palette = app.palette;
    let currency = &app.settings.currency_symbol;
    let block = panel_block(" Forecast for Next 2 Days ", &palette);

    let lines = match report.forecast.band() {
        Some(band) => {
            let band = band.rounded();
            vec![
                Line::from(""),
                forecast_line(
                    format!("Lower Limit ({})", currency),
                    format_amount(band.lower, currency),
                    &palette,
                ),
                Line::from(""),
                forecast_line(
                    format!("Upper Limit ({})", currency),
                    format_amount(band.upper, currency),
                    &palette,
                ),
            ]
        }
        None => vec![Line::from(Span::styled(
            FORECAST_NEED_DATA,
            Style::default().fg(palette.muted),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn forecast_line(label: String, value: String, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<18}", label), Style::default().fg(palette.muted)),
        Span::styled(
            value,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn render_suggestions(frame: &mut Frame, report: &AnalyticsReport, palette: &Palette, area: Rect) {
    let block = panel_block(" Personalized Suggestions ", palette);

    let lines: Vec<Line> = report
        .suggestions
        .iter()
        .map(|suggestion| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(palette.success)),
                Span::styled(suggestion.clone(), Style::default().fg(palette.text)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
