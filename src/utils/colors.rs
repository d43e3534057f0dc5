/// ANSI color helper utilities for terminal output.
use crate::models::attendance::AttendanceStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Status card color:
/// ClockedIn → green, OnBreak → yellow, ClockedOut → grey
pub fn color_for_status(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::ClockedIn => GREEN,
        AttendanceStatus::OnBreak => YELLOW,
        AttendanceStatus::ClockedOut => GREY,
    }
}

/// Billable rate color: ≥75% green, ≥40% yellow, below red, 0 grey.
pub fn color_for_rate(rate: u32) -> &'static str {
    match rate {
        0 => GREY,
        1..=39 => RED,
        40..=74 => YELLOW,
        _ => GREEN,
    }
}

/// Grey out empty placeholders ("--:--", "0h 0m"), leave the rest as is.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v.starts_with("--:--") || v == "0h 0m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
