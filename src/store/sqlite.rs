/// SQLite-backed result store
///
/// One long-lived connection behind a mutex, opened at startup and
/// reused for every append. The schema is created on construction so a
/// fresh data directory works out of the box.
use super::{ResultRecord, ResultStore};
use crate::errors::{ClassifierError, ClassifierResult};
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

pub struct SqliteStore {
    db: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) the database and ensure the schema exists
    pub fn new(database_path: &str) -> ClassifierResult<Self> {
        let db = Connection::open(database_path)?;

        let store = Self {
            db: Arc::new(Mutex::new(db)),
        };
        store.create_tables()?;

        Ok(store)
    }

    /// In-memory database (tests)
    pub fn open_in_memory() -> ClassifierResult<Self> {
        let db = Connection::open_in_memory()?;

        let store = Self {
            db: Arc::new(Mutex::new(db)),
        };
        store.create_tables()?;

        Ok(store)
    }

    fn create_tables(&self) -> ClassifierResult<()> {
        let db = self.db.lock().unwrap();

        db.execute(
            "CREATE TABLE IF NOT EXISTS classification_results (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL,
                label TEXT NOT NULL,
                score REAL NOT NULL,
                recorded_at DATETIME NOT NULL
            )",
            [],
        )?;

        db.execute(
            "CREATE INDEX IF NOT EXISTS idx_results_recorded_at
             ON classification_results(recorded_at)",
            [],
        )?;

        Ok(())
    }

    /// Total number of stored records (used by tests and startup logging)
    pub fn count(&self) -> ClassifierResult<u64> {
        let db = self.db.lock().unwrap();
        let count: i64 =
            db.query_row("SELECT COUNT(*) FROM classification_results", [], |row| {
                row.get(0)
            })?;
        Ok(count as u64)
    }
}

#[async_trait]
impl ResultStore for SqliteStore {
    async fn append(&self, record: &ResultRecord) -> ClassifierResult<()> {
        let db = self.db.lock().unwrap();

        db.execute(
            "INSERT INTO classification_results (text, label, score, recorded_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                record.text,
                record.label,
                record.score,
                record.recorded_at.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
            ],
        )
        .map_err(|e| ClassifierError::StoreUnavailable(e.to_string()))?;

        Ok(())
    }
}
