//! Layout definitions for the TUI
//!
//! Sidebar on the left, dashboard on the right, status bar along the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title, tagline and key hints
    pub sidebar: Rect,
    /// Dashboard area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(30), // Sidebar (fixed width)
                Constraint::Min(40),    // Dashboard
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the sidebar
pub struct SidebarLayout {
    /// Title and tagline
    pub header: Rect,
    /// Record count and totals
    pub summary: Rect,
    /// Key hints
    pub actions: Rect,
}

impl SidebarLayout {
    /// Calculate sidebar layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Length(6), // Summary
                Constraint::Min(5),    // Actions
            ])
            .split(area);

        Self {
            header: chunks[0],
            summary: chunks[1],
            actions: chunks[2],
        }
    }
}

/// Layout for the dashboard
pub struct DashboardLayout {
    /// Page title
    pub header: Rect,
    /// Expense history table
    pub history: Rect,
    /// Category distribution chart
    pub chart: Rect,
    /// Analytics panel, when shown
    pub analytics: Option<Rect>,
}

impl DashboardLayout {
    /// Calculate dashboard layout; the analytics panel takes the lower part
    pub fn new(area: Rect, with_analytics: bool) -> Self {
        let constraints: Vec<Constraint> = if with_analytics {
            vec![
                Constraint::Length(3),
                Constraint::Percentage(50),
                Constraint::Min(8),
            ]
        } else {
            vec![Constraint::Length(3), Constraint::Min(5)]
        };

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let overview = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            history: overview[0],
            chart: overview[1],
            analytics: vertical.get(2).copied(),
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
