//! TUI Views module
//!
//! The dashboard with its history, chart and analytics panels, plus the
//! sidebar and status bar.

pub mod analytics;
pub mod chart;
pub mod dashboard;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);
    dashboard::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
    }
}
