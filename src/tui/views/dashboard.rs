//! Dashboard view
//!
//! Page title, then the "Expense Overview" section with the history table and
//! the category chart. The overview is only drawn when records exist.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::models::format_amount;
use crate::tui::app::{AnalyticsPanel, App};
use crate::tui::layout::DashboardLayout;

use super::{analytics, chart};

/// Dashboard title
pub const DASHBOARD_TITLE: &str = "SplitiFy Expense Manager";

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = DashboardLayout::new(area, app.analytics != AnalyticsPanel::Hidden);

    render_header(frame, app, layout.header);

    if app.records.is_empty() {
        render_empty(frame, app, layout.history.union(layout.chart));
    } else {
        render_history(frame, app, layout.history);
        chart::render(frame, app, layout.chart);
    }

    if let Some(analytics_area) = layout.analytics {
        analytics::render(frame, app, analytics_area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette;
    let block = Block::default()
        .title(format!(" {} ", DASHBOARD_TITLE))
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let subtitle = if app.records.is_empty() {
        "Start by adding an expense"
    } else {
        "Expense Overview"
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        subtitle,
        Style::default()
            .fg(palette.heading)
            .add_modifier(Modifier::BOLD),
    )))
    .block(block);

    frame.render_widget(paragraph, area);
}

fn render_empty(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from("No expenses recorded yet."),
        Line::from("Press 'a' to add your first expense."),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .style(Style::default().fg(palette.muted));

    frame.render_widget(text, area);
}

fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette;
    let block = Block::default()
        .title(" Expense History ")
        .title_style(Style::default().fg(palette.accent))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let widths = [
        Constraint::Length(5),  // ID
        Constraint::Length(12), // Date
        Constraint::Length(14), // Category
        Constraint::Min(12),    // Amount
    ];

    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from("Date"),
        Cell::from("Category"),
        Cell::from("Amount"),
    ])
    .style(
        Style::default()
            .fg(palette.heading)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let currency = &app.settings.currency_symbol;
    let rows: Vec<Row> = app
        .records
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.id.to_string()).style(Style::default().fg(palette.muted)),
                Cell::from(record.date.format(&app.settings.date_format).to_string()),
                Cell::from(record.category.as_str())
                    .style(Style::default().fg(palette.category_color(record.category))),
                Cell::from(format!("{:>12}", format_amount(record.amount, currency))),
            ])
            .style(Style::default().fg(palette.text))
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
