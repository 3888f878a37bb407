//! Terminal setup and teardown
//!
//! Initializes and restores the terminal, including a panic hook that puts the
//! terminal back before the panic message is printed.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::info;

use crate::config::settings::Settings;
use crate::storage::Storage;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard until the user quits
pub fn run_tui(storage: &Storage, settings: &Settings) -> Result<()> {
    let mut app = App::new(storage, settings);
    app.refresh();
    info!(records = app.records.len(), theme = %settings.theme, "dashboard started");

    let mut terminal = init_terminal()?;
    let events = EventHandler::default();

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| {
                super::views::render(frame, &mut app);
            })?;

            match events.next()? {
                Event::Key(key) => handle_event(&mut app, Event::Key(key))?,
                Event::Resize(_, _) | Event::Tick => {}
            }

            if app.should_quit {
                return Ok(());
            }
        }
    })();

    restore_terminal()?;
    info!("dashboard closed");
    result
}
