//! rTimetracker library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules: attendance tracking, the task timer, the time entry log and its
//! metrics, all persisted in SQLite.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::logic::Core;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let now = Core::resolve_now(cli.at.as_deref())?;

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Clock { .. } => cli::commands::clock::handle(&cli.command, cfg, now),
        Commands::Break { .. } => cli::commands::brk::handle(&cli.command, cfg, now),
        Commands::Timer { .. } => cli::commands::timer::handle(&cli.command, cfg, now),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, now),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, now),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, now),
        Commands::Status => cli::commands::status::handle(cfg, now),
        Commands::Projects => cli::commands::projects::handle(cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command line override of the database
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
