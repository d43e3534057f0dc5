use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::queries::{load_entries, load_entries_by_date};
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeLogEntry;
use crate::models::project::ProjectDirectory;
use crate::ui::confirm::ask_confirmation;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use clap::ValueEnum;
use rusqlite::Connection;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat row written by the exporters.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: f64,
    pub task_name: String,
    pub project_id: String,
    pub project_name: String,
    pub is_billable: bool,
}

impl EntryExport {
    pub fn from_entry(entry: &TimeLogEntry, projects: &ProjectDirectory) -> Self {
        Self {
            id: entry.id,
            date: entry.date_str(),
            start_time: entry.start_str(),
            end_time: entry.end_str(),
            duration: entry.duration,
            task_name: entry.task_name.clone(),
            project_id: entry.project_id.clone(),
            project_name: projects.name_of(&entry.project_id).to_string(),
            is_billable: entry.is_billable,
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export time entries, all of them or a single day, oldest first.
    ///
    /// Returns the number of exported rows.
    pub fn export(
        conn: &Connection,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        date: Option<NaiveDate>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let mut entries = match date {
            Some(d) => load_entries_by_date(conn, &d)?,
            None => load_entries(conn)?,
        };

        if entries.is_empty() {
            warning("No time entries found for the selected range. Nothing to export.");
            return Ok(0);
        }

        entries.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then(a.start_time.cmp(&b.start_time))
                .then(a.id.cmp(&b.id))
        });

        let projects = cfg.project_directory();
        let rows: Vec<EntryExport> = entries
            .iter()
            .map(|e| EntryExport::from_entry(e, &projects))
            .collect();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        success(format!(
            "Exported {} entries to {}",
            rows.len(),
            path.display()
        ));
        ttlog_soft(
            conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} entries as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}

/// An existing file is only replaced with `force` or an explicit yes.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists()
        || force
        || ask_confirmation(&format!("The file '{}' already exists. Overwrite it?", path.display()))
    {
        return Ok(());
    }

    Err(AppError::Export(
        "existing file not overwritten".to_string(),
    ))
}

fn export_json(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

fn export_csv(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
