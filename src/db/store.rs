//! SQLite implementation of the persistence ports.

use crate::db::queries;
use crate::errors::AppResult;
use crate::models::entry::TimeLogEntry;
use crate::store::{EntryRepository, StateStore};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// Borrows an open connection; the caller keeps using it (e.g. for the
/// internal log) once the workday is done.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl StateStore for SqliteStore<'_> {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM state WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn put_raw(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO state (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.conn.execute("DELETE FROM state WHERE key = ?1", [key])?;
        Ok(())
    }
}

impl EntryRepository for SqliteStore<'_> {
    fn load_entries(&self) -> AppResult<Vec<TimeLogEntry>> {
        queries::load_entries(self.conn)
    }

    fn insert_entry(&mut self, entry: &TimeLogEntry) -> AppResult<()> {
        queries::insert_entry(self.conn, entry)
    }

    fn delete_entry(&mut self, id: i64) -> AppResult<()> {
        queries::delete_entry(self.conn, id)?;
        Ok(())
    }
}
