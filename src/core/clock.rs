use crate::config::Config;
use crate::core::logic::Core;
use crate::core::workday::ActionOutcome;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::attendance::{AttendanceRecord, AttendanceStatus};
use crate::models::project::ProjectDirectory;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::date_str;
use crate::utils::formatting::opt_clock;
use crate::utils::time::clock_str;
use chrono::NaiveDateTime;
use rusqlite::Connection;

/// High-level business logic for the attendance commands.
pub struct ClockLogic;

/// Explain why an attendance action was ignored.
fn explain_ignored(action: &str, record: &AttendanceRecord) {
    let reason = match record.status {
        AttendanceStatus::ClockedOut if record.clock_out.is_some() => format!(
            "you already clocked out today at {}",
            opt_clock(record.clock_out)
        ),
        AttendanceStatus::ClockedOut => "you are not clocked in".to_string(),
        AttendanceStatus::ClockedIn => format!("you are clocked in since {}", opt_clock(record.clock_in)),
        AttendanceStatus::OnBreak => format!("you are on break since {}", opt_clock(record.break_start)),
    };
    warning(format!("Cannot {action}: {reason}. Nothing changed."));
}

/// A forced timer stop is reported and audited like an explicit one.
fn report_stopped(conn: &Connection, outcome: &ActionOutcome, projects: &ProjectDirectory) {
    if let Some(entry) = &outcome.stopped_entry {
        let described = Core::describe_entry(entry, projects);
        info(format!("Task timer stopped and saved: {}", described));
        ttlog_soft(conn, "timer_stop", &entry.id.to_string(), &described);
    }
}

impl ClockLogic {
    pub fn clock_in(pool: &DbPool, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
        let mut workday = Core::open_workday(&pool.conn, cfg, now)?;

        if !workday.clock_in(now)? {
            explain_ignored("clock in", workday.attendance());
            return Ok(());
        }

        let at = clock_str(now.time());
        success(format!("Clocked in at {}.", at));
        ttlog_soft(
            &pool.conn,
            "clock_in",
            &date_str(now.date()),
            &format!("Clocked in at {}", at),
        );
        Ok(())
    }

    pub fn clock_out(pool: &DbPool, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
        // the forced timer stop and the status change land together or not at all
        let (outcome, record, projects) = Core::in_transaction(&pool.conn, |conn| {
            let mut workday = Core::open_workday(conn, cfg, now)?;
            let outcome = workday.clock_out(now)?;
            Ok((outcome, workday.attendance().clone(), workday.projects().clone()))
        })?;

        if !outcome.applied {
            explain_ignored("clock out", &record);
            return Ok(());
        }

        report_stopped(&pool.conn, &outcome, &projects);

        let at = clock_str(now.time());
        success(format!("Clocked out at {}.", at));
        ttlog_soft(
            &pool.conn,
            "clock_out",
            &date_str(now.date()),
            &format!("Clocked out at {}", at),
        );
        Ok(())
    }

    pub fn start_break(pool: &DbPool, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
        let (outcome, record, projects) = Core::in_transaction(&pool.conn, |conn| {
            let mut workday = Core::open_workday(conn, cfg, now)?;
            let outcome = workday.start_break(now)?;
            Ok((outcome, workday.attendance().clone(), workday.projects().clone()))
        })?;

        if !outcome.applied {
            explain_ignored("start a break", &record);
            return Ok(());
        }

        report_stopped(&pool.conn, &outcome, &projects);

        let at = clock_str(now.time());
        success(format!("Break started at {}.", at));
        ttlog_soft(
            &pool.conn,
            "break_start",
            &date_str(now.date()),
            &format!("Break started at {}", at),
        );
        Ok(())
    }

    pub fn end_break(pool: &DbPool, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
        let mut workday = Core::open_workday(&pool.conn, cfg, now)?;

        if !workday.end_break(now)? {
            explain_ignored("end a break", workday.attendance());
            return Ok(());
        }

        let at = clock_str(now.time());
        success(format!("Break ended at {}.", at));
        ttlog_soft(
            &pool.conn,
            "break_end",
            &date_str(now.date()),
            &format!("Break ended at {}", at),
        );
        Ok(())
    }
}
