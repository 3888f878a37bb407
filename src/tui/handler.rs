//! Event handler for the TUI
//!
//! Routes key presses to the open dialog or to the dashboard. After every key
//! the record set is re-read from storage.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, AnalyticsPanel, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => {
            handle_key_event(app, key);
            app.refresh();
            Ok(())
        }
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.active_dialog {
        ActiveDialog::AddExpense => {
            dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::None => handle_dashboard_key(app, key),
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::AddExpense);
        }

        KeyCode::Char('s') | KeyCode::Char('A') => {
            app.clear_status();
            app.show_analytics();
        }

        KeyCode::Esc => {
            if app.analytics != AnalyticsPanel::Hidden {
                app.hide_analytics();
            }
            app.clear_status();
        }

        KeyCode::Char('r') => app.set_status("Reloaded"),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SplitifyPaths;
    use crate::config::settings::Settings;
    use crate::models::Category;
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitifyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.initialize().unwrap();
        (temp_dir, storage)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    #[test]
    fn test_quit() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_dialog() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.open_dialog(ActiveDialog::AddExpense);

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_q_in_form_does_not_quit() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_key_reads_records_written_elsewhere() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.refresh();
        assert!(app.records.is_empty());

        storage
            .expenses
            .insert(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(), Category::Bills, 900.0)
            .unwrap();
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.records.len(), 1);
    }

    #[test]
    fn test_analytics_toggle() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .expenses
            .insert(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(), Category::Food, 120.0)
            .unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.refresh();

        press(&mut app, KeyCode::Char('s'));
        assert!(matches!(app.analytics, AnalyticsPanel::Ready(_)));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.analytics, AnalyticsPanel::Hidden);
    }
}
