use super::{EntryRepository, StateStore};
use crate::errors::AppResult;
use crate::models::entry::TimeLogEntry;
use std::collections::HashMap;

/// In-process store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    entries: Vec<TimeLogEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing entries.
    pub fn with_entries(entries: Vec<TimeLogEntry>) -> Self {
        Self {
            values: HashMap::new(),
            entries,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl StateStore for MemoryStore {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn put_raw(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

impl EntryRepository for MemoryStore {
    fn load_entries(&self) -> AppResult<Vec<TimeLogEntry>> {
        Ok(self.entries.clone())
    }

    fn insert_entry(&mut self, entry: &TimeLogEntry) -> AppResult<()> {
        self.entries.push(entry.clone());
        Ok(())
    }

    fn delete_entry(&mut self, id: i64) -> AppResult<()> {
        self.entries.retain(|e| e.id != id);
        Ok(())
    }
}
