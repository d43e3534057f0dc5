use crate::cli::parser::{Commands, billable_choice};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::utils::date::parse_required_date;
use crate::utils::time::parse_required_time;
use chrono::NaiveDateTime;

/// Add a time entry manually.
pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Add {
        task,
        start,
        end,
        date,
        project,
        billable,
        non_billable,
    } = cmd
    {
        let d = date.as_deref().map(parse_required_date).transpose()?;
        let start_t = parse_required_time(start)?;
        let end_t = parse_required_time(end)?;

        let pool = Core::open_db(cfg)?;
        AddLogic::apply(
            &pool,
            cfg,
            now,
            task,
            d,
            start_t,
            end_t,
            project.as_deref(),
            billable_choice(*billable, *non_billable),
        )?;
    }

    Ok(())
}
