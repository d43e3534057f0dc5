use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::utils::date::parse_required_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date,
        force,
    } = cmd
    {
        let d = date.as_deref().map(parse_required_date).transpose()?;
        let pool = Core::open_db(cfg)?;
        ExportLogic::export(&pool.conn, cfg, *format, file, d, *force)?;
    }
    Ok(())
}
