use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::ui::messages::success;
use rusqlite::Connection;

/// Handle the `init` command
///
/// Creates the config directory and file (not in test mode), then the
/// database with every pending migration applied.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing rTimetracker…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database    : {}", cfg.database);

    let conn = Connection::open(&cfg.database)?;
    init_db(&conn)?;

    ttlog_soft(
        &conn,
        "init",
        &cfg.database,
        &format!("Database ready with {} projects", cfg.projects.len()),
    );

    success("rTimetracker is ready. Start the day with `clock in`.");
    Ok(())
}
