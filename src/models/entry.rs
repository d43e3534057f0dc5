use crate::utils::date::date_str;
use crate::utils::time::time_str;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A completed block of logged work. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeLogEntry {
    pub id: i64,
    pub task_name: String,
    pub project_id: String,
    pub is_billable: bool,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    /// Hours, rounded to 2 decimals. Never negative.
    pub duration: f64,
}

impl TimeLogEntry {
    pub fn date_str(&self) -> String {
        date_str(self.date)
    }

    pub fn start_str(&self) -> String {
        time_str(self.start_time)
    }

    pub fn end_str(&self) -> String {
        time_str(self.end_time)
    }
}

/// Fields of a time entry before the log assigns it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub task_name: String,
    pub project_id: String,
    pub is_billable: bool,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration: f64,
}

impl NewEntry {
    pub fn with_id(self, id: i64) -> TimeLogEntry {
        TimeLogEntry {
            id,
            task_name: self.task_name,
            project_id: self.project_id,
            is_billable: self.is_billable,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            duration: self.duration.max(0.0),
        }
    }
}

/// Form input for a manually entered block of time.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualEntry {
    pub task_name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub project_id: String,
    pub is_billable: bool,
}

/// Entry times are stored as `HH:MM`.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        crate::utils::time::parse_clock(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid time '{raw}'")))
    }
}
