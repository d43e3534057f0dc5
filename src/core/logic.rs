use crate::config::Config;
use crate::core::workday::Workday;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::entry::TimeLogEntry;
use crate::models::project::ProjectDirectory;
use crate::ui::messages::{info, warning};
use crate::utils::date;
use crate::utils::time::{format_duration, parse_instant};
use chrono::NaiveDateTime;
use rusqlite::Connection;

/// Shared plumbing for the command handlers.
pub struct Core;

impl Core {
    /// Resolve "now": the `--at` override if given, local wall-clock otherwise.
    pub fn resolve_now(at: Option<&str>) -> AppResult<NaiveDateTime> {
        match at {
            Some(s) => parse_instant(s, date::today()),
            None => Ok(date::now()),
        }
    }

    /// Open the configured database and bring its schema up to date.
    pub fn open_db(cfg: &Config) -> AppResult<DbPool> {
        let pool = DbPool::new(&cfg.database)?;
        run_pending_migrations(&pool.conn)?;
        Ok(pool)
    }

    /// Run `f` inside one SQLite transaction. Nothing `f` wrote survives an error.
    pub fn in_transaction<T, F>(conn: &Connection, f: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        let tx = conn.unchecked_transaction()?;
        let tx_conn: &Connection = &tx;
        let value = f(tx_conn)?;
        tx.commit()?;
        Ok(value)
    }

    /// Open today's workday on `conn`, reporting any repair done on load.
    pub fn open_workday<'c>(
        conn: &'c Connection,
        cfg: &Config,
        now: NaiveDateTime,
    ) -> AppResult<Workday<SqliteStore<'c>>> {
        let (workday, report) = Workday::open(
            SqliteStore::new(conn),
            &cfg.storage_key,
            cfg.project_directory(),
            now.date(),
        )?;

        if report.stale_reset {
            info(format!(
                "New day: attendance reset for {}.",
                date::date_str(now.date())
            ));
        }

        if let Some(t) = report.dropped_timer {
            warning(format!(
                "Discarded the timer for '{}' started at {}: you are no longer clocked in.",
                t.task_name,
                t.started_at.format("%Y-%m-%d %H:%M")
            ));
        }

        Ok(workday)
    }

    /// One-line description of an entry for messages and the audit log.
    pub fn describe_entry(entry: &TimeLogEntry, projects: &ProjectDirectory) -> String {
        format!(
            "#{} '{}' ({}) {} {}→{} {}{}",
            entry.id,
            entry.task_name,
            projects.name_of(&entry.project_id),
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            format_duration(entry.duration),
            if entry.is_billable { " billable" } else { "" }
        )
    }
}
