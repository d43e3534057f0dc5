//! Single task timer, gated on the attendance status.

use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceStatus;
use crate::models::entry::NewEntry;
use crate::models::timer_session::TimerSession;
use crate::utils::time::{round2, to_minute};
use chrono::{NaiveDateTime, Timelike};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskTimer {
    session: Option<TimerSession>,
}

impl TaskTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_session(session: Option<TimerSession>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> Option<&TimerSession> {
        self.session.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the "start timer" control is enabled.
    pub fn can_start(&self, status: AttendanceStatus) -> bool {
        !self.is_running() && status == AttendanceStatus::ClockedIn
    }

    pub fn start(
        &mut self,
        status: AttendanceStatus,
        project_id: &str,
        task_name: &str,
        is_billable: bool,
        now: NaiveDateTime,
    ) -> AppResult<&TimerSession> {
        if self.is_running() {
            return Err(AppError::TimerNotAllowed(
                "a task timer is already running".into(),
            ));
        }
        if status != AttendanceStatus::ClockedIn {
            return Err(AppError::TimerNotAllowed(match status {
                AttendanceStatus::OnBreak => "end your break first".into(),
                _ => "clock in first".into(),
            }));
        }

        let task_name = task_name.trim();
        if task_name.is_empty() {
            return Err(AppError::TimerNotAllowed("task name is required".into()));
        }

        // Stored start keeps whole seconds only.
        let started_at = now.with_nanosecond(0).unwrap_or(now);

        Ok(self.session.insert(TimerSession {
            project_id: project_id.to_string(),
            task_name: task_name.to_string(),
            is_billable,
            started_at,
        }))
    }

    /// Whole seconds since the timer started; 0 when idle.
    pub fn elapsed_seconds(&self, now: NaiveDateTime) -> i64 {
        self.session
            .as_ref()
            .map(|s| (now - s.started_at).num_seconds().max(0))
            .unwrap_or(0)
    }

    /// Elapsed hours, unrounded, for live metrics.
    pub fn elapsed_hours(&self, now: NaiveDateTime) -> f64 {
        self.elapsed_seconds(now) as f64 / 3600.0
    }

    /// Stop the running timer and turn it into an entry.
    /// Returns `None` when no timer is running.
    pub fn stop(&mut self, now: NaiveDateTime) -> Option<NewEntry> {
        let elapsed = self.elapsed_seconds(now);
        let session = self.session.take()?;

        Some(NewEntry {
            task_name: session.task_name,
            project_id: session.project_id,
            is_billable: session.is_billable,
            date: session.started_at.date(),
            start_time: to_minute(session.started_at.time()),
            end_time: to_minute(now.time()),
            duration: round2(elapsed as f64 / 3600.0),
        })
    }
}
