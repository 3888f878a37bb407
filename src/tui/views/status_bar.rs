//! Status bar view
//!
//! Shows the record count, the theme, the latest status message and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette;
    let mut spans = vec![
        Span::styled(" Expenses: ", Style::default().fg(palette.muted)),
        Span::styled(
            app.records.len().to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("{} theme", app.settings.theme),
            Style::default().fg(palette.muted),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(palette.heading),
        ));
    }

    let hints = " a:Add  s:Analytics  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(palette.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
