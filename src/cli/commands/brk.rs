use crate::cli::parser::{BreakAction, Commands};
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::core::logic::Core;
use crate::errors::AppResult;
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Break { action } = cmd {
        let pool = Core::open_db(cfg)?;
        match action {
            BreakAction::Start => ClockLogic::start_break(&pool, cfg, now)?,
            BreakAction::End => ClockLogic::end_break(&pool, cfg, now)?,
        }
    }

    Ok(())
}
