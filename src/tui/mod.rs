//! Terminal User Interface module
//!
//! A single-screen ratatui dashboard: sidebar, expense overview, on-demand
//! analytics panel, an add-expense dialog and a help dialog.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout and colours
pub mod layout;
pub mod theme;

pub use app::App;
pub use terminal::run_tui;
