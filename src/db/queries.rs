use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeLogEntry;
use crate::utils::time::parse_clock;
use chrono::{Local, NaiveDate};
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_entry(row: &Row) -> Result<TimeLogEntry> {
    let date_str: String = row.get("date")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(0, AppError::InvalidDate(date_str.clone())))?;
    let start_time =
        parse_clock(&start_str).ok_or_else(|| conversion_error(0, AppError::InvalidTime(start_str)))?;
    let end_time =
        parse_clock(&end_str).ok_or_else(|| conversion_error(0, AppError::InvalidTime(end_str)))?;

    Ok(TimeLogEntry {
        id: row.get("id")?,
        task_name: row.get("task_name")?,
        project_id: row.get("project_id")?,
        is_billable: row.get::<_, i32>("is_billable")? == 1,
        date,
        start_time,
        end_time,
        duration: row.get("duration")?,
    })
}

pub fn load_entries(conn: &Connection) -> AppResult<Vec<TimeLogEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, task_name, project_id, is_billable, date, start_time, end_time, duration
         FROM entries
         ORDER BY date DESC, id DESC",
    )?;

    let rows = stmt.query_map([], map_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entries_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<TimeLogEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, task_name, project_id, is_billable, date, start_time, end_time, duration
         FROM entries
         WHERE date = ?1
         ORDER BY id DESC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_entry(conn: &Connection, e: &TimeLogEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (id, task_name, project_id, is_billable, date, start_time, end_time, duration, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            e.id,
            e.task_name,
            e.project_id,
            if e.is_billable { 1 } else { 0 },
            e.date_str(),
            e.start_str(),
            e.end_str(),
            e.duration,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn load_log(conn: &Connection) -> Result<Vec<(i32, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i32>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
