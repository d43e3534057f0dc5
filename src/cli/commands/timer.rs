use crate::cli::parser::{Commands, TimerAction, billable_choice};
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::task::TimerLogic;
use crate::errors::AppResult;
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Timer { action } = cmd {
        let pool = Core::open_db(cfg)?;
        match action {
            TimerAction::Start {
                task,
                project,
                billable,
                non_billable,
            } => TimerLogic::start(
                &pool,
                cfg,
                now,
                task,
                project.as_deref(),
                billable_choice(*billable, *non_billable),
            )?,
            TimerAction::Stop => TimerLogic::stop(&pool, cfg, now)?,
        }
    }

    Ok(())
}
