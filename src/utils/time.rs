//! Time utilities: parsing HH:MM, duration computations, formatting hours, etc.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Accepts both `HH:MM` and `HH:MM:SS`.
pub fn parse_clock(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .ok()
        .or_else(|| parse_time(t))
}

pub fn parse_required_time(input: &str) -> AppResult<NaiveTime> {
    parse_time(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

/// Resolve a `--at` override against `today`.
///
/// Accepted forms: `HH:MM`, `HH:MM:SS`, `YYYY-MM-DD HH:MM[:SS]`
/// and `YYYY-MM-DDTHH:MM[:SS]`.
pub fn parse_instant(input: &str, today: NaiveDate) -> AppResult<NaiveDateTime> {
    let s = input.trim();

    if let Some(t) = parse_clock(s) {
        return Ok(today.and_time(t));
    }

    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    Err(AppError::InvalidTime(input.to_string()))
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Hours between two times of day, rounded to 2 decimals.
/// Returns 0 when `end` is not after `start`.
pub fn calculate_duration(start: NaiveTime, end: NaiveTime) -> f64 {
    let diff_minutes = (end - start).num_minutes();
    if diff_minutes <= 0 {
        return 0.0;
    }
    round2(diff_minutes as f64 / 60.0)
}

/// `3.5` → `"3h 30m"`; zero (or negative) → `"0h 0m"`.
pub fn format_duration(hours: f64) -> String {
    if hours <= 0.0 {
        return "0h 0m".to_string();
    }
    let total_minutes = (hours * 60.0).round() as i64;
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

/// Live counter rendering: `HH:MM:SS`.
pub fn format_seconds(total_seconds: i64) -> String {
    let s = total_seconds.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

pub fn time_str(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

pub fn clock_str(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Drop seconds (and below): entries are logged with minute precision.
pub fn to_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}
