use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::queries::{load_entries, load_entries_by_date};
use crate::errors::AppResult;
use crate::models::entry::TimeLogEntry;
use crate::models::project::ProjectDirectory;
use crate::ui::messages::info;
use crate::utils::date::{date_str, parse_required_date};
use crate::utils::formatting::{billable_label, truncate};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_duration;
use chrono::NaiveDateTime;

const TASK_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::List { date, all } = cmd {
        let pool = Core::open_db(cfg)?;

        let (entries, scope) = if *all {
            (load_entries(&pool.conn)?, "all dates".to_string())
        } else {
            let d = match date {
                Some(s) => parse_required_date(s)?,
                None => now.date(),
            };
            (load_entries_by_date(&pool.conn, &d)?, date_str(d))
        };

        if entries.is_empty() {
            info(format!("No time entries for {}.", scope));
            return Ok(());
        }

        print_entries(&entries, &cfg.project_directory(), &scope);
    }

    Ok(())
}

fn print_entries(entries: &[TimeLogEntry], projects: &ProjectDirectory, scope: &str) {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("DATE"),
        Column::left("START"),
        Column::left("END"),
        Column::right("DURATION"),
        Column::left("TASK"),
        Column::left("PROJECT"),
        Column::left("BILLABLE"),
    ]);

    let mut total = 0.0;
    for e in entries {
        total += e.duration;
        table.add_row(vec![
            e.id.to_string(),
            e.date_str(),
            e.start_str(),
            e.end_str(),
            format_duration(e.duration),
            truncate(&e.task_name, TASK_WIDTH),
            projects.name_of(&e.project_id).to_string(),
            billable_label(e.is_billable).to_string(),
        ]);
    }

    println!("🕒 Time entries ({}):\n", scope);
    print!("{}", table.render());
    println!(
        "\n{} entries, {} in total",
        entries.len(),
        format_duration(total)
    );
}
