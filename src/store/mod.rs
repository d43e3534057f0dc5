//! Persistence ports used by the workday.
//!
//! `StateStore` is a small key-value store holding JSON documents (the day's
//! attendance record, the running timer). `EntryRepository` keeps the time
//! entries. `MemoryStore` implements both in memory; the SQLite
//! implementation lives in `db::store`.

pub mod memory;

use crate::errors::AppResult;
use crate::models::entry::TimeLogEntry;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use memory::MemoryStore;

pub trait StateStore {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>>;

    fn put_raw(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&mut self, key: &str) -> AppResult<()>;

    fn load<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.get_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw)
    }
}

pub trait EntryRepository {
    fn load_entries(&self) -> AppResult<Vec<TimeLogEntry>>;

    fn insert_entry(&mut self, entry: &TimeLogEntry) -> AppResult<()>;

    fn delete_entry(&mut self, id: i64) -> AppResult<()>;
}
