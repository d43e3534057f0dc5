//! Append-only collection of completed time entries.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{ManualEntry, NewEntry, TimeLogEntry};
use crate::utils::time::calculate_duration;

#[derive(Debug, Clone)]
pub struct TimeEntryLog {
    entries: Vec<TimeLogEntry>,
    next_id: i64,
}

impl Default for TimeEntryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEntryLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a log from already persisted entries (any order).
    pub fn from_entries(mut entries: Vec<TimeLogEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Self { entries, next_id }
    }

    /// Newest date first.
    pub fn entries(&self) -> &[TimeLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&TimeLogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Insert at the head, then re-sort by date descending.
    /// The sort is stable: among same-day entries the newest stays first.
    pub fn append(&mut self, entry: NewEntry) -> &TimeLogEntry {
        let id = self.next_id;
        self.next_id += 1;

        self.entries.insert(0, entry.with_id(id));
        self.entries.sort_by(|a, b| b.date.cmp(&a.date));

        let pos = self.entries.iter().position(|e| e.id == id).unwrap_or(0);
        &self.entries[pos]
    }

    /// Remove an entry after the caller confirmed it.
    ///
    /// `confirm` sees the entry about to go; returning `false` leaves the log
    /// untouched and yields `Ok(None)`.
    pub fn delete<F>(&mut self, id: i64, confirm: F) -> AppResult<Option<TimeLogEntry>>
    where
        F: FnOnce(&TimeLogEntry) -> bool,
    {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(AppError::EntryNotFound(id))?;

        if !confirm(&self.entries[idx]) {
            return Ok(None);
        }

        Ok(Some(self.entries.remove(idx)))
    }

    /// Validate a manual entry form and turn it into a new entry.
    pub fn validate_manual(form: &ManualEntry) -> AppResult<NewEntry> {
        let task_name = form.task_name.trim();
        if task_name.is_empty() {
            return Err(AppError::InvalidEntry("task name is required".into()));
        }

        let duration = calculate_duration(form.start_time, form.end_time);
        if duration <= 0.0 {
            return Err(AppError::InvalidEntry(format!(
                "end time {} must be later than start time {} (duration 0h 0m)",
                form.end_time.format("%H:%M"),
                form.start_time.format("%H:%M")
            )));
        }

        Ok(NewEntry {
            task_name: task_name.to_string(),
            project_id: form.project_id.clone(),
            is_billable: form.is_billable,
            date: form.date,
            start_time: form.start_time,
            end_time: form.end_time,
            duration,
        })
    }

    /// Manual-entry submit: validate, then append.
    pub fn submit_manual(&mut self, form: &ManualEntry) -> AppResult<&TimeLogEntry> {
        let entry = Self::validate_manual(form)?;
        Ok(self.append(entry))
    }
}
