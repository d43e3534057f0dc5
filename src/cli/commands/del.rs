use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::confirm::ask_confirmation;
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let pool = Core::open_db(cfg)?;
        let projects = cfg.project_directory();

        DeleteLogic::apply(&pool, cfg, now, *id, |entry| {
            *yes
                || ask_confirmation(&format!(
                    "Delete entry {}?",
                    Core::describe_entry(entry, &projects)
                ))
        })?;
    }

    Ok(())
}
