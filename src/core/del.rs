use crate::config::Config;
use crate::core::logic::Core;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::entry::TimeLogEntry;
use crate::ui::messages::{info, success};
use chrono::NaiveDateTime;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete entry `id` once `confirm` agrees.
    pub fn apply<F>(pool: &DbPool, cfg: &Config, now: NaiveDateTime, id: i64, confirm: F) -> AppResult<()>
    where
        F: FnOnce(&TimeLogEntry) -> bool,
    {
        let mut workday = Core::open_workday(&pool.conn, cfg, now)?;

        match workday.delete_entry(id, confirm)? {
            Some(entry) => {
                let described = Core::describe_entry(&entry, workday.projects());
                success(format!("Deleted entry {}", described));
                ttlog_soft(&pool.conn, "del", &id.to_string(), &described);
            }
            None => info("Operation cancelled."),
        }

        Ok(())
    }
}
