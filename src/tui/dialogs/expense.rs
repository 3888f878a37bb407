//! Add-expense dialog
//!
//! Modal form with a date field, a category selector and an amount field.
//! Tab/Shift+Tab move between fields, Enter saves, Esc cancels.

use chrono::{Days, Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::services::{parse_amount, parse_date, ExpenseService, INPUT_DATE_FORMAT};
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::input::TextInput;

/// Message shown once an expense has been written
pub const EXPENSE_ADDED: &str = "Expense added successfully!";

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Date,
    Category,
    Amount,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
            Self::Amount => Self::Category,
        }
    }
}

/// State for the add-expense form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,

    /// Date input, prefilled with today
    pub date_input: TextInput,

    /// Selected category
    pub category: Category,

    /// Amount input
    pub amount_input: TextInput,

    /// Increment applied by Up/Down on the amount field
    pub amount_step: f64,

    /// Error message to display
    pub error_message: Option<String>,
}

impl ExpenseFormState {
    /// Create a new form dated today
    pub fn new(amount_step: f64) -> Self {
        Self::for_date(Local::now().date_naive(), amount_step)
    }

    /// Create a new form with a given starting date
    pub fn for_date(date: NaiveDate, amount_step: f64) -> Self {
        let mut state = Self {
            focused_field: ExpenseField::Date,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(date.format(INPUT_DATE_FORMAT).to_string()),
            category: Category::default(),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            amount_step,
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: ExpenseField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.date_input.focused = self.focused_field == ExpenseField::Date;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
    }

    /// The focused text input, if the focused field is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Date => Some(&mut self.date_input),
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Category => None,
        }
    }

    /// Move the amount by `steps` increments, never below zero
    ///
    /// An empty or unparseable amount counts as zero.
    pub fn step_amount(&mut self, steps: f64) {
        let current = parse_amount(self.amount_input.value()).unwrap_or(0.0);
        let next = (current + steps * self.amount_step).max(0.0);
        self.amount_input.set_value(format_step_value(next));
    }

    /// Move the date by `days`, if the date field holds a valid date
    pub fn step_date(&mut self, days: i64) {
        let Ok(date) = parse_date(self.date_input.value()) else {
            return;
        };
        let moved = if days >= 0 {
            date.checked_add_days(Days::new(days as u64))
        } else {
            date.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(moved) = moved {
            self.date_input
                .set_value(moved.format(INPUT_DATE_FORMAT).to_string());
        }
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

fn format_step_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Render the add-expense dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.palette;
    let area = centered_rect(60, 40, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;

    frame.render_widget(Paragraph::new(form.date_input.line(&palette)), chunks[0]);

    let category_focused = form.focused_field == ExpenseField::Category;
    let label_style = if category_focused {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.accent)
    };
    let mut category_spans = vec![Span::styled(format!("{:>10}: ", "Category"), label_style)];
    let category_style = Style::default()
        .fg(palette.category_color(form.category))
        .add_modifier(Modifier::BOLD);
    if category_focused {
        category_spans.push(Span::styled("◀ ", Style::default().fg(palette.muted)));
        category_spans.push(Span::styled(form.category.as_str(), category_style));
        category_spans.push(Span::styled(" ▶", Style::default().fg(palette.muted)));
    } else {
        category_spans.push(Span::styled(form.category.as_str(), category_style));
    }
    frame.render_widget(Paragraph::new(Line::from(category_spans)), chunks[1]);

    let mut amount_line = form.amount_input.line(&palette);
    if form.focused_field == ExpenseField::Amount {
        amount_line.spans.push(Span::styled(
            format!("  (Up/Down ±{})", format_step_value(form.amount_step)),
            Style::default().fg(palette.muted),
        ));
    }
    frame.render_widget(Paragraph::new(amount_line), chunks[2]);

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.clone(),
            Style::default().fg(palette.error),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[4]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(palette.heading)),
        Span::raw(" Next  "),
        Span::styled("[Shift+Tab]", Style::default().fg(palette.heading)),
        Span::raw(" Prev  "),
        Span::styled("[Enter]", Style::default().fg(palette.success)),
        Span::raw(" Add Expense  "),
        Span::styled("[Esc]", Style::default().fg(palette.error)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[5]);
}

/// Handle key input for the expense dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }

        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),

        KeyCode::Enter => {
            if let Err(e) = save_expense(app) {
                app.expense_form.set_error(e);
            }
        }

        KeyCode::Up | KeyCode::Down => {
            let up = key.code == KeyCode::Up;
            form.clear_error();
            match form.focused_field {
                ExpenseField::Date => form.step_date(if up { 1 } else { -1 }),
                ExpenseField::Category => {
                    form.category = if up { form.category.prev() } else { form.category.next() };
                }
                ExpenseField::Amount => form.step_amount(if up { 1.0 } else { -1.0 }),
            }
        }

        KeyCode::Left | KeyCode::Right => {
            let right = key.code == KeyCode::Right;
            if form.focused_field == ExpenseField::Category {
                form.category = if right { form.category.next() } else { form.category.prev() };
            } else if let Some(input) = form.focused_input() {
                if right {
                    input.move_right();
                } else {
                    input.move_left();
                }
            }
        }

        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
        }

        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
        }

        KeyCode::Backspace => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }

        KeyCode::Delete => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }

        KeyCode::Char(c) => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
        }

        _ => return false,
    }

    true
}

/// Validate and store the expense, then re-read the record set
fn save_expense(app: &mut App) -> Result<(), String> {
    let form = &app.expense_form;
    ExpenseService::new(app.storage)
        .add_from_input(
            form.date_input.value(),
            form.category.as_str(),
            form.amount_input.value(),
        )
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.set_status(EXPENSE_ADDED);
    app.refresh();
    app.select_last();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SplitifyPaths;
    use crate::config::settings::Settings;
    use crate::storage::Storage;
    use crate::tui::app::ActiveDialog;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitifyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.initialize().unwrap();
        (temp_dir, storage)
    }

    fn form() -> ExpenseFormState {
        ExpenseFormState::for_date(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(), 100.0)
    }

    #[test]
    fn test_field_navigation() {
        let mut form = form();
        assert_eq!(form.focused_field, ExpenseField::Date);
        assert!(form.date_input.focused);

        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Category);
        assert!(form.focused_input().is_none());

        form.next_field();
        assert!(form.amount_input.focused);
        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Date);
        form.prev_field();
        assert_eq!(form.focused_field, ExpenseField::Amount);
    }

    #[test]
    fn test_step_amount() {
        let mut form = form();
        form.step_amount(1.0);
        assert_eq!(form.amount_input.value(), "100");
        form.step_amount(1.0);
        assert_eq!(form.amount_input.value(), "200");

        form.amount_input.set_value("50.5");
        form.step_amount(1.0);
        assert_eq!(form.amount_input.value(), "150.50");

        form.step_amount(-5.0);
        assert_eq!(form.amount_input.value(), "0");
    }

    #[test]
    fn test_step_date_crosses_month() {
        let mut form = form();
        form.step_date(1);
        assert_eq!(form.date_input.value(), "2025-02-01");
        form.step_date(-2);
        assert_eq!(form.date_input.value(), "2025-01-30");

        form.date_input.set_value("not a date");
        form.step_date(1);
        assert_eq!(form.date_input.value(), "not a date");
    }

    #[test]
    fn test_enter_saves_and_refreshes() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.open_dialog(ActiveDialog::AddExpense);
        app.expense_form = form();

        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.expense_form.category, Category::Transport);
        handle_key(&mut app, key(KeyCode::Tab));
        for c in "42.5".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(!app.has_dialog());
        assert_eq!(app.status_message.as_deref(), Some(EXPENSE_ADDED));
        assert_eq!(app.records.len(), 1);
        assert_eq!(app.records[0].category, Category::Transport);
        assert_eq!(app.records[0].amount, 42.5);
        assert_eq!(app.records[0].date, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
    }

    #[test]
    fn test_invalid_amount_keeps_dialog_open() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.open_dialog(ActiveDialog::AddExpense);
        app.expense_form.set_focus(ExpenseField::Amount);
        for c in "abc".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(app.has_dialog());
        assert!(app.expense_form.error_message.is_some());
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_esc_cancels() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.open_dialog(ActiveDialog::AddExpense);

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.has_dialog());
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }
}
