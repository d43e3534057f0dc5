//! Daily clock-in / break / clock-out state machine.
//!
//! ```text
//! ClockedOut ──clock in──▶ ClockedIn ──start break──▶ OnBreak
//!     ▲                        │  ▲                       │
//!     └──────clock out─────────┘  └──────end break────────┘
//!     ▲                                                   │
//!     └───────────────────────clock out───────────────────┘
//! ```
//!
//! Actions whose precondition does not hold are ignored and report `false`.

use crate::models::attendance::{AttendanceRecord, AttendanceStatus};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceTracker {
    record: AttendanceRecord,
}

impl AttendanceTracker {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            record: AttendanceRecord::fresh(date),
        }
    }

    /// Rebuild the tracker from a stored record.
    ///
    /// The second value is `true` when the stored record belonged to another
    /// day and was replaced with a fresh one for `today`.
    pub fn restore(stored: Option<AttendanceRecord>, today: NaiveDate) -> (Self, bool) {
        match stored {
            Some(record) if record.date == today => (Self { record }, false),
            Some(_) => (Self::new(today), true),
            None => (Self::new(today), false),
        }
    }

    pub fn record(&self) -> &AttendanceRecord {
        &self.record
    }

    pub fn status(&self) -> AttendanceStatus {
        self.record.status
    }

    pub fn date(&self) -> NaiveDate {
        self.record.date
    }

    // ---------------------------
    // Control gating
    // ---------------------------

    /// Only the initial state of the day accepts a clock-in; after a clock-out
    /// the record is history.
    pub fn can_clock_in(&self) -> bool {
        self.record.status == AttendanceStatus::ClockedOut && self.record.clock_out.is_none()
    }

    pub fn can_start_break(&self) -> bool {
        self.record.status == AttendanceStatus::ClockedIn
    }

    pub fn can_end_break(&self) -> bool {
        self.record.status == AttendanceStatus::OnBreak
    }

    pub fn can_clock_out(&self) -> bool {
        self.record.status != AttendanceStatus::ClockedOut
    }

    // ---------------------------
    // Transitions
    // ---------------------------

    pub fn clock_in(&mut self, now: NaiveTime) -> bool {
        if !self.can_clock_in() {
            return false;
        }
        self.record.clock_in = Some(now);
        self.record.status = AttendanceStatus::ClockedIn;
        true
    }

    pub fn start_break(&mut self, now: NaiveTime) -> bool {
        if !self.can_start_break() {
            return false;
        }
        // A new break supersedes the last closed one.
        self.record.break_start = Some(now);
        self.record.break_end = None;
        self.record.status = AttendanceStatus::OnBreak;
        true
    }

    pub fn end_break(&mut self, now: NaiveTime) -> bool {
        if !self.can_end_break() {
            return false;
        }
        self.close_break(now);
        self.record.status = AttendanceStatus::ClockedIn;
        true
    }

    pub fn clock_out(&mut self, now: NaiveTime) -> bool {
        if !self.can_clock_out() {
            return false;
        }
        if self.record.status == AttendanceStatus::OnBreak && self.record.has_open_break() {
            self.close_break(now);
        }
        self.record.clock_out = Some(now);
        self.record.status = AttendanceStatus::ClockedOut;
        true
    }

    fn close_break(&mut self, now: NaiveTime) {
        if let Some(start) = self.record.break_start {
            self.record.break_seconds += (now - start).num_seconds().max(0);
        }
        self.record.break_end = Some(now);
    }

    // ---------------------------
    // Derived
    // ---------------------------

    /// Seconds actually worked today, breaks excluded.
    pub fn worked_seconds(&self, now: NaiveDateTime) -> i64 {
        let Some(start) = self.record.clock_in else {
            return 0;
        };

        let end = match self.record.status {
            AttendanceStatus::ClockedOut => self.record.clock_out.unwrap_or(start),
            AttendanceStatus::OnBreak => self.record.break_start.unwrap_or(start),
            AttendanceStatus::ClockedIn => {
                if now.date() == self.record.date {
                    now.time()
                } else {
                    // Past midnight the day's window is capped at its end.
                    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(start)
                }
            }
        };

        ((end - start).num_seconds() - self.record.break_seconds).max(0)
    }
}
