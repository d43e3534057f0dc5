use crate::config::Config;
use crate::core::logic::Core;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::entry::ManualEntry;
use crate::ui::messages::success;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        pool: &DbPool,
        cfg: &Config,
        now: NaiveDateTime,
        task: &str,
        date: Option<NaiveDate>,
        start: NaiveTime,
        end: NaiveTime,
        project: Option<&str>,
        billable: Option<bool>,
    ) -> AppResult<()> {
        let mut workday = Core::open_workday(&pool.conn, cfg, now)?;

        let form = ManualEntry {
            task_name: task.to_string(),
            date: date.unwrap_or(now.date()),
            start_time: start,
            end_time: end,
            project_id: project.unwrap_or(cfg.default_project.as_str()).to_string(),
            is_billable: cfg.resolve_billable(billable),
        };

        let entry = workday.submit_manual_entry(&form)?;

        let described = Core::describe_entry(&entry, workday.projects());
        success(format!("Added entry {}", described));
        ttlog_soft(&pool.conn, "add", &entry.id.to_string(), &described);

        Ok(())
    }
}
