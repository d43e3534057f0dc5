use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Where the employee stands in the daily attendance cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    ClockedOut,
    ClockedIn,
    OnBreak,
}

/// One day of attendance for one employee.
///
/// Serialized with the same camelCase keys the record has always been
/// stored under (`clockIn`, `breakStart`, ...), so stored state stays readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub clock_in: Option<NaiveTime>,
    pub clock_out: Option<NaiveTime>,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
    pub status: AttendanceStatus,
    /// Seconds of breaks already closed today.
    #[serde(default)]
    pub break_seconds: i64,
}

impl AttendanceRecord {
    /// Initial state for `date`: clocked out, nothing recorded.
    pub fn fresh(date: NaiveDate) -> Self {
        Self {
            date,
            clock_in: None,
            clock_out: None,
            break_start: None,
            break_end: None,
            status: AttendanceStatus::ClockedOut,
            break_seconds: 0,
        }
    }

    pub fn has_open_break(&self) -> bool {
        self.break_start.is_some() && self.break_end.is_none()
    }

    /// Label shown on the status card.
    pub fn status_text(&self) -> &'static str {
        match self.status {
            AttendanceStatus::ClockedIn => "Clocked In",
            AttendanceStatus::OnBreak => "On Break",
            AttendanceStatus::ClockedOut if self.clock_in.is_some() => "Clocked Out",
            AttendanceStatus::ClockedOut => "Ready to Start",
        }
    }
}
