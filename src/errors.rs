//! Crate-wide error type. Library code returns `AppResult`; only `main`
//! turns an error into an exit code.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// User supplied date that is not `YYYY-MM-DD`.
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// User supplied time that is not `HH:MM` (or an `--at` value).
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    /// A manual entry failed validation and was not logged.
    #[error("Invalid time entry: {0}")]
    InvalidEntry(String),

    /// Timer start refused by the attendance state or a running timer.
    #[error("Task timer not available: {0}")]
    TimerNotAllowed(String),

    #[error("Unknown project: {0}")]
    UnknownProject(String),

    #[error("No time entry with id {0}")]
    EntryNotFound(i64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
