//! Colour palette derived from the configured theme

use ratatui::style::Color;

use crate::config::settings::Theme;
use crate::models::Category;

/// Colours used across views and dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub heading: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                accent: Color::Blue,
                text: Color::Black,
                muted: Color::DarkGray,
                border: Color::Gray,
                highlight_bg: Color::LightBlue,
                heading: Color::Magenta,
                success: Color::Green,
                error: Color::Red,
            },
            Theme::Dark => Self {
                accent: Color::Cyan,
                text: Color::White,
                muted: Color::Gray,
                border: Color::DarkGray,
                highlight_bg: Color::DarkGray,
                heading: Color::Yellow,
                success: Color::LightGreen,
                error: Color::LightRed,
            },
        }
    }

    /// Slice colour for a category in the distribution chart
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Food => Color::Yellow,
            Category::Transport => Color::Blue,
            Category::Entertainment => Color::Magenta,
            Category::Shopping => Color::Green,
            Category::Bills => Color::Red,
            Category::Other => Color::Cyan,
        }
    }
}
