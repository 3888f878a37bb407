//! Sidebar view
//!
//! Shows the app title, a short summary of the record set and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::analytics::SpendingSummary;
use crate::display::truncate;
use crate::models::format_amount;
use crate::tui::app::{AnalyticsPanel, App};
use crate::tui::layout::SidebarLayout;

/// Sidebar title
pub const SIDEBAR_TITLE: &str = "SplitiFy Expense Tracker";

/// Tagline under the title
pub const TAGLINE: &str = "Manage your daily expenses smartly!";

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, app, layout.header);
    render_summary(frame, app, layout.summary);
    render_actions(frame, app, layout.actions);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette;
    let block = Block::default()
        .title(format!(" {} ", SIDEBAR_TITLE))
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let tagline = Paragraph::new(TAGLINE)
        .block(block)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(palette.muted));

    frame.render_widget(tagline, area);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette;
    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let currency = &app.settings.currency_symbol;
    let lines = match SpendingSummary::from_records(&app.records) {
        Some(summary) => vec![
            summary_line("Expenses", app.records.len().to_string(), app),
            summary_line("Total", format_amount(summary.total, currency), app),
            summary_line("Average", format_amount(summary.average, currency), app),
            summary_line("Top", summary.top_category.to_string(), app),
        ],
        None => vec![Line::from(Span::styled(
            "No expenses yet",
            Style::default().fg(palette.muted),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn summary_line(label: &str, value: String, app: &App) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<9}", label), Style::default().fg(app.palette.muted)),
        Span::styled(truncate(&value, 16), Style::default().fg(app.palette.text)),
    ])
}

fn render_actions(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette;
    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let analytics_label = if app.analytics == AnalyticsPanel::Hidden {
        "Show Analytics"
    } else {
        "Refresh Analytics"
    };

    let actions = [
        ("a", "Add Expense"),
        ("s", analytics_label),
        ("?", "Help"),
        ("q", "Quit"),
    ];

    let items: Vec<ListItem> = actions
        .iter()
        .map(|(key, name)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("[{}] ", key), Style::default().fg(palette.heading)),
                Span::styled(*name, Style::default().fg(palette.text)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
