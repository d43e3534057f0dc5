use crate::config::Config;
use crate::core::logic::Core;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::time_str;
use chrono::NaiveDateTime;

/// High-level business logic for the `timer` command.
pub struct TimerLogic;

impl TimerLogic {
    pub fn start(
        pool: &DbPool,
        cfg: &Config,
        now: NaiveDateTime,
        task: &str,
        project: Option<&str>,
        billable: Option<bool>,
    ) -> AppResult<()> {
        let mut workday = Core::open_workday(&pool.conn, cfg, now)?;

        let project_id = project.unwrap_or(cfg.default_project.as_str());
        let is_billable = cfg.resolve_billable(billable);

        let session = workday.start_timer(project_id, task, is_billable, now)?;

        let message = format!(
            "Timer started at {} for '{}' ({}){}.",
            time_str(session.started_at.time()),
            session.task_name,
            workday.projects().name_of(&session.project_id),
            if session.is_billable { ", billable" } else { "" }
        );
        success(&message);
        ttlog_soft(&pool.conn, "timer_start", &session.project_id, &message);

        Ok(())
    }

    pub fn stop(pool: &DbPool, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
        let (stopped, projects) = Core::in_transaction(&pool.conn, |conn| {
            let mut workday = Core::open_workday(conn, cfg, now)?;
            let stopped = workday.stop_timer(now)?;
            Ok((stopped, workday.projects().clone()))
        })?;

        match stopped {
            Some(entry) => {
                let described = Core::describe_entry(&entry, &projects);
                success(format!("Timer stopped, entry saved: {}", described));
                ttlog_soft(&pool.conn, "timer_stop", &entry.id.to_string(), &described);
            }
            None => warning("No task timer is running."),
        }

        Ok(())
    }
}
