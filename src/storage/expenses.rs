//! Expense repository over SQLite
//!
//! Every operation opens its own connection and drops it on return, so no
//! unit of work spans two calls.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use tracing::{debug, warn};

use crate::error::{SplitifyError, SplitifyResult};
use crate::models::{Category, ExpenseId, ExpenseRecord};

const CREATE_EXPENSES_TABLE: &str = "CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    category TEXT NOT NULL,
    amount REAL NOT NULL
)";

/// Repository for the `expenses` table
pub struct ExpenseRepository {
    db_path: PathBuf,
}

impl ExpenseRepository {
    /// Create a repository backed by the database file at `db_path`
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing database file
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn open(&self) -> SplitifyResult<Connection> {
        Connection::open(&self.db_path).map_err(|e| {
            warn!(path = %self.db_path.display(), error = %e, "cannot open expense database");
            SplitifyError::Storage(format!(
                "Failed to open expense database at {}: {}",
                self.db_path.display(),
                e
            ))
        })
    }

    /// Create the `expenses` table if it does not exist yet
    pub fn initialize(&self) -> SplitifyResult<()> {
        let conn = self.open()?;
        conn.execute(CREATE_EXPENSES_TABLE, [])?;
        debug!(path = %self.db_path.display(), "expenses table ready");
        Ok(())
    }

    /// Append one expense; the id is assigned by SQLite
    pub fn insert(&self, date: NaiveDate, category: Category, amount: f64) -> SplitifyResult<()> {
        let conn = self.open()?;
        conn.execute(
            "INSERT INTO expenses (date, category, amount) VALUES (?1, ?2, ?3)",
            params![date, category.as_str(), amount],
        )
        .map_err(|e| SplitifyError::Storage(format!("Failed to insert expense: {}", e)))?;

        debug!(
            id = conn.last_insert_rowid(),
            %date,
            %category,
            amount,
            "expense inserted"
        );
        Ok(())
    }

    /// Fetch every expense in insertion order
    pub fn fetch_all(&self) -> SplitifyResult<Vec<ExpenseRecord>> {
        let conn = self.open()?;
        let mut stmt =
            conn.prepare("SELECT id, date, category, amount FROM expenses ORDER BY id ASC")?;

        let records = stmt
            .query_map([], row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = records.len(), "expenses fetched");
        Ok(records)
    }

    /// Number of stored expenses
    pub fn count(&self) -> SplitifyResult<i64> {
        let conn = self.open()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<ExpenseRecord> {
    let category_text: String = row.get(2)?;
    let category = category_text
        .parse::<Category>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    Ok(ExpenseRecord {
        id: ExpenseId::new(row.get(0)?),
        date: row.get(1)?,
        category,
        amount: row.get(3)?,
    })
}
