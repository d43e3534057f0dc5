//! One employee's working day: attendance, task timer and time entries behind
//! a single action surface.
//!
//! Every mutating action persists its effect through the store before it
//! returns, so reopening a `Workday` on the same store resumes exactly where
//! the previous one stopped.

use crate::core::attendance::AttendanceTracker;
use crate::core::entries::TimeEntryLog;
use crate::core::metrics::{self, DailyMetrics, LiveTimer, ProjectHours};
use crate::core::timer::TaskTimer;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, AttendanceStatus};
use crate::models::entry::{ManualEntry, NewEntry, TimeLogEntry};
use crate::models::project::ProjectDirectory;
use crate::models::timer_session::TimerSession;
use crate::store::{EntryRepository, StateStore};
use chrono::{NaiveDate, NaiveDateTime};

pub const DEFAULT_STORAGE_KEY: &str = "todayAttendance";
pub const TIMER_KEY: &str = "activeTimer";

/// What `Workday::open` had to repair in the stored state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestoreReport {
    /// The stored attendance record was from another day and was reset.
    pub stale_reset: bool,
    /// A stored timer that could not keep running and was discarded.
    pub dropped_timer: Option<TimerSession>,
}

/// Result of an attendance action that may stop the task timer on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionOutcome {
    pub applied: bool,
    pub stopped_entry: Option<TimeLogEntry>,
}

pub struct Workday<S> {
    store: S,
    storage_key: String,
    today: NaiveDate,
    tracker: AttendanceTracker,
    timer: TaskTimer,
    log: TimeEntryLog,
    projects: ProjectDirectory,
}

impl<S: StateStore + EntryRepository> Workday<S> {
    pub fn open(
        mut store: S,
        storage_key: &str,
        projects: ProjectDirectory,
        today: NaiveDate,
    ) -> AppResult<(Self, RestoreReport)> {
        let mut report = RestoreReport::default();

        let stored: Option<AttendanceRecord> = store.load(storage_key)?;
        let (tracker, stale) = AttendanceTracker::restore(stored, today);
        if stale {
            store.remove(storage_key)?;
            report.stale_reset = true;
        }
        store.save(storage_key, tracker.record())?;

        let mut session: Option<TimerSession> = store.load(TIMER_KEY)?;
        if session.is_some() && (stale || tracker.status() != AttendanceStatus::ClockedIn) {
            report.dropped_timer = session.take();
            store.remove(TIMER_KEY)?;
        }

        let log = TimeEntryLog::from_entries(store.load_entries()?);

        Ok((
            Self {
                store,
                storage_key: storage_key.to_string(),
                today,
                tracker,
                timer: TaskTimer::from_session(session),
                log,
                projects,
            },
            report,
        ))
    }

    // ---------------------------
    // Attendance actions
    // ---------------------------

    pub fn clock_in(&mut self, now: NaiveDateTime) -> AppResult<bool> {
        let applied = self.tracker.clock_in(now.time());
        if applied {
            self.persist_attendance()?;
        }
        Ok(applied)
    }

    /// Starting a break stops a running task timer first.
    pub fn start_break(&mut self, now: NaiveDateTime) -> AppResult<ActionOutcome> {
        if !self.tracker.can_start_break() {
            return Ok(ActionOutcome::default());
        }

        let stopped_entry = self.stop_timer(now)?;
        self.tracker.start_break(now.time());
        self.persist_attendance()?;

        Ok(ActionOutcome {
            applied: true,
            stopped_entry,
        })
    }

    pub fn end_break(&mut self, now: NaiveDateTime) -> AppResult<bool> {
        let applied = self.tracker.end_break(now.time());
        if applied {
            self.persist_attendance()?;
        }
        Ok(applied)
    }

    /// Clocking out stops a running task timer before the status changes.
    pub fn clock_out(&mut self, now: NaiveDateTime) -> AppResult<ActionOutcome> {
        if !self.tracker.can_clock_out() {
            return Ok(ActionOutcome::default());
        }

        let stopped_entry = self.stop_timer(now)?;
        self.tracker.clock_out(now.time());
        self.persist_attendance()?;

        Ok(ActionOutcome {
            applied: true,
            stopped_entry,
        })
    }

    // ---------------------------
    // Task timer
    // ---------------------------

    pub fn can_start_timer(&self) -> bool {
        self.timer.can_start(self.tracker.status())
    }

    pub fn start_timer(
        &mut self,
        project_id: &str,
        task_name: &str,
        is_billable: bool,
        now: NaiveDateTime,
    ) -> AppResult<TimerSession> {
        self.ensure_project(project_id)?;

        let session = self
            .timer
            .start(self.tracker.status(), project_id, task_name, is_billable, now)?
            .clone();
        self.store.save(TIMER_KEY, &session)?;

        Ok(session)
    }

    /// Stop the running timer and log it. `None` when nothing was running.
    pub fn stop_timer(&mut self, now: NaiveDateTime) -> AppResult<Option<TimeLogEntry>> {
        let Some(new_entry) = self.timer.stop(now) else {
            return Ok(None);
        };

        self.store.remove(TIMER_KEY)?;
        let entry = self.append(new_entry)?;
        Ok(Some(entry))
    }

    // ---------------------------
    // Entries
    // ---------------------------

    pub fn submit_manual_entry(&mut self, form: &ManualEntry) -> AppResult<TimeLogEntry> {
        let new_entry = TimeEntryLog::validate_manual(form)?;
        self.ensure_project(&new_entry.project_id)?;
        self.append(new_entry)
    }

    /// Delete an entry once `confirm` agrees. Declining returns `Ok(None)`.
    pub fn delete_entry<F>(&mut self, id: i64, confirm: F) -> AppResult<Option<TimeLogEntry>>
    where
        F: FnOnce(&TimeLogEntry) -> bool,
    {
        let removed = self.log.delete(id, confirm)?;
        if removed.is_some() {
            self.store.delete_entry(id)?;
        }
        Ok(removed)
    }

    fn append(&mut self, new_entry: NewEntry) -> AppResult<TimeLogEntry> {
        let entry = self.log.append(new_entry).clone();
        self.store.insert_entry(&entry)?;
        Ok(entry)
    }

    fn ensure_project(&self, project_id: &str) -> AppResult<()> {
        if self.projects.contains(project_id) {
            Ok(())
        } else {
            Err(AppError::UnknownProject(project_id.to_string()))
        }
    }

    fn persist_attendance(&mut self) -> AppResult<()> {
        self.store.save(&self.storage_key, self.tracker.record())
    }
}

impl<S> Workday<S> {
    // ---------------------------
    // Selectors
    // ---------------------------

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn status(&self) -> AttendanceStatus {
        self.tracker.status()
    }

    pub fn attendance(&self) -> &AttendanceRecord {
        self.tracker.record()
    }

    pub fn tracker(&self) -> &AttendanceTracker {
        &self.tracker
    }

    pub fn timer(&self) -> Option<&TimerSession> {
        self.timer.session()
    }

    pub fn entries(&self) -> &[TimeLogEntry] {
        self.log.entries()
    }

    pub fn projects(&self) -> &ProjectDirectory {
        &self.projects
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn elapsed_seconds(&self, now: NaiveDateTime) -> i64 {
        self.timer.elapsed_seconds(now)
    }

    fn live(&self, now: NaiveDateTime) -> Option<LiveTimer> {
        LiveTimer::from_session(self.timer.session(), self.timer.elapsed_seconds(now))
    }

    pub fn total_hours_today(&self, now: NaiveDateTime) -> f64 {
        metrics::total_hours(self.log.entries(), self.today, self.live(now))
    }

    pub fn billable_hours_today(&self, now: NaiveDateTime) -> f64 {
        metrics::billable_hours(self.log.entries(), self.today, self.live(now))
    }

    pub fn billable_rate_today(&self, now: NaiveDateTime) -> u32 {
        metrics::billable_rate(self.billable_hours_today(now), self.total_hours_today(now))
    }

    pub fn hours_by_project(&self, day: NaiveDate) -> Vec<ProjectHours> {
        metrics::hours_by_project(self.log.entries(), day)
    }

    pub fn metrics(&self, now: NaiveDateTime) -> DailyMetrics {
        DailyMetrics::compute(
            self.log.entries(),
            self.today,
            self.live(now),
            self.tracker.worked_seconds(now),
        )
    }
}
