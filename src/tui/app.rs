//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The record set is re-read from storage after every handled key, so the
//! snapshot here is never older than the last interaction.

use tracing::{debug, warn};

use crate::analytics::AnalyticsReport;
use crate::config::settings::Settings;
use crate::display::ANALYTICS_NEED_DATA;
use crate::models::ExpenseRecord;
use crate::reports::CategoryChart;
use crate::storage::Storage;

use super::dialogs::expense::ExpenseFormState;
use super::theme::Palette;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    Help,
}

/// What the analytics panel is showing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalyticsPanel {
    /// Not requested since the last change to the record set
    #[default]
    Hidden,
    /// Requested with no records stored
    NeedData,
    Ready(AnalyticsReport),
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Colours for the configured theme
    pub palette: Palette,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Record set as of the last refresh, in storage order
    pub records: Vec<ExpenseRecord>,

    /// Distribution chart for `records`, `None` when there are none
    pub chart: Option<CategoryChart>,

    /// Analytics panel state
    pub analytics: AnalyticsPanel,

    /// Highlighted row in the history table
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add-expense form state
    pub expense_form: ExpenseFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            palette: Palette::for_theme(settings.theme),
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            records: Vec::new(),
            chart: None,
            analytics: AnalyticsPanel::default(),
            selected_index: 0,
            status_message: None,
            expense_form: ExpenseFormState::new(settings.amount_step),
        }
    }

    /// Re-read the full record set from storage
    ///
    /// A failed read keeps the previous snapshot and reports the error in the
    /// status bar. A changed record set hides stale analytics.
    pub fn refresh(&mut self) {
        match self.storage.expenses.fetch_all() {
            Ok(records) => {
                if records != self.records {
                    debug!(count = records.len(), "record set changed");
                    if matches!(self.analytics, AnalyticsPanel::Ready(_)) {
                        self.analytics = AnalyticsPanel::Hidden;
                    }
                    self.chart = CategoryChart::from_records(&records);
                    self.records = records;
                }
                self.selected_index = self
                    .selected_index
                    .min(self.records.len().saturating_sub(1));
            }
            Err(e) => {
                warn!(error = %e, "failed to load expenses");
                self.set_status(format!("Failed to load expenses: {}", e));
            }
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Compute forecast and suggestions over the current snapshot
    pub fn show_analytics(&mut self) {
        match AnalyticsReport::generate(&self.records, &self.settings.currency_symbol) {
            Some(report) => {
                debug!(records = self.records.len(), "analytics computed");
                self.analytics = AnalyticsPanel::Ready(report);
            }
            None => {
                self.analytics = AnalyticsPanel::NeedData;
                self.set_status(ANALYTICS_NEED_DATA);
            }
        }
    }

    /// Hide the analytics panel
    pub fn hide_analytics(&mut self) {
        self.analytics = AnalyticsPanel::Hidden;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::AddExpense {
            self.expense_form = ExpenseFormState::new(self.settings.amount_step);
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Move the history selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move the history selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.records.len() {
            self.selected_index += 1;
        }
    }

    /// Jump to the first record
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to the most recent record
    pub fn select_last(&mut self) {
        self.selected_index = self.records.len().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SplitifyPaths;
    use crate::models::Category;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitifyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.initialize().unwrap();
        (temp_dir, storage)
    }

    fn insert(storage: &Storage, category: Category, amount: f64) {
        storage
            .expenses
            .insert(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), category, amount)
            .unwrap();
    }

    #[test]
    fn test_refresh_reads_records_and_chart() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        app.refresh();
        assert!(app.records.is_empty());
        assert!(app.chart.is_none());

        insert(&storage, Category::Food, 100.0);
        app.refresh();
        assert_eq!(app.records.len(), 1);
        assert!(app.chart.is_some());
    }

    #[test]
    fn test_analytics_without_records() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.refresh();

        app.show_analytics();
        assert_eq!(app.analytics, AnalyticsPanel::NeedData);
        assert_eq!(app.status_message.as_deref(), Some(ANALYTICS_NEED_DATA));
    }

    #[test]
    fn test_new_record_hides_stale_analytics() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        insert(&storage, Category::Food, 100.0);
        app.refresh();
        app.show_analytics();
        assert!(matches!(app.analytics, AnalyticsPanel::Ready(_)));

        // unchanged record set keeps the panel
        app.refresh();
        assert!(matches!(app.analytics, AnalyticsPanel::Ready(_)));

        insert(&storage, Category::Bills, 50.0);
        app.refresh();
        assert_eq!(app.analytics, AnalyticsPanel::Hidden);
    }

    #[test]
    fn test_selection_is_clamped() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        insert(&storage, Category::Food, 1.0);
        insert(&storage, Category::Food, 2.0);
        app.refresh();

        app.move_down();
        app.move_down();
        assert_eq!(app.selected_index, 1);
        app.move_up();
        app.move_up();
        assert_eq!(app.selected_index, 0);
        app.select_last();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_dialogs() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        assert!(!app.has_dialog());
        app.open_dialog(ActiveDialog::Help);
        assert!(app.has_dialog());
        app.close_dialog();
        assert!(!app.has_dialog());
    }
}
