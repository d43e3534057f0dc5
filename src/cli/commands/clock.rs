use crate::cli::parser::{ClockAction, Commands};
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::core::logic::Core;
use crate::errors::AppResult;
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Clock { action } = cmd {
        let pool = Core::open_db(cfg)?;
        match action {
            ClockAction::In => ClockLogic::clock_in(&pool, cfg, now)?,
            ClockAction::Out => ClockLogic::clock_out(&pool, cfg, now)?,
        }
    }

    Ok(())
}
