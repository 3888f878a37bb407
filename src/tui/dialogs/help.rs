//! Help dialog
//!
//! Lists the dashboard and form key bindings.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::theme::Palette;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.palette;
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    let paragraph = Paragraph::new(help_lines(&palette))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(palette: &Palette) -> Vec<Line<'static>> {
    vec![
        heading("Dashboard", palette),
        Line::from(""),
        key_line("a / n", "Add expense", palette),
        key_line("s", "Show analytics", palette),
        key_line("Esc", "Hide analytics", palette),
        key_line("j/k ↑/↓", "Move through expense history", palette),
        key_line("g / G", "First / latest expense", palette),
        key_line("r", "Reload from the database", palette),
        key_line("?", "Show this help", palette),
        key_line("q", "Quit", palette),
        Line::from(""),
        heading("Add Expense", palette),
        Line::from(""),
        key_line("Tab", "Next field", palette),
        key_line("Shift+Tab", "Previous field", palette),
        key_line("↑/↓", "Change date, category or amount", palette),
        key_line("←/→", "Change category", palette),
        key_line("Enter", "Save", palette),
        key_line("Esc", "Cancel", palette),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(palette.muted),
        )),
    ]
}

fn heading(title: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(palette.heading),
    ))
}

/// Create a formatted key line
fn key_line(key: &str, description: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(palette.accent)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(palette.text)),
    ])
}
