//! Read-time aggregates over the entry log plus the live timer.

use crate::models::entry::TimeLogEntry;
use crate::models::timer_session::TimerSession;
use chrono::NaiveDate;
use serde::Serialize;

/// Running timer contribution to today's totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LiveTimer {
    pub elapsed_hours: f64,
    pub is_billable: bool,
}

impl LiveTimer {
    pub fn from_session(session: Option<&TimerSession>, elapsed_seconds: i64) -> Option<Self> {
        session.map(|s| Self {
            elapsed_hours: elapsed_seconds.max(0) as f64 / 3600.0,
            is_billable: s.is_billable,
        })
    }
}

pub fn total_hours(entries: &[TimeLogEntry], day: NaiveDate, live: Option<LiveTimer>) -> f64 {
    let logged: f64 = entries
        .iter()
        .filter(|e| e.date == day)
        .map(|e| e.duration)
        .sum();

    logged + live.map(|l| l.elapsed_hours).unwrap_or(0.0)
}

pub fn billable_hours(entries: &[TimeLogEntry], day: NaiveDate, live: Option<LiveTimer>) -> f64 {
    let logged: f64 = entries
        .iter()
        .filter(|e| e.date == day && e.is_billable)
        .map(|e| e.duration)
        .sum();

    let running = match live {
        Some(l) if l.is_billable => l.elapsed_hours,
        _ => 0.0,
    };

    logged + running
}

/// Whole percentage in `0..=100`; 0 when nothing was logged.
pub fn billable_rate(billable: f64, total: f64) -> u32 {
    if total <= 0.0 {
        return 0;
    }
    (billable / total * 100.0).round().clamp(0.0, 100.0) as u32
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectHours {
    pub project_id: String,
    pub hours: f64,
}

/// Per-project totals for a day, largest first.
pub fn hours_by_project(entries: &[TimeLogEntry], day: NaiveDate) -> Vec<ProjectHours> {
    let mut out: Vec<ProjectHours> = Vec::new();

    for e in entries.iter().filter(|e| e.date == day) {
        match out.iter_mut().find(|p| p.project_id == e.project_id) {
            Some(p) => p.hours += e.duration,
            None => out.push(ProjectHours {
                project_id: e.project_id.clone(),
                hours: e.duration,
            }),
        }
    }

    out.sort_by(|a, b| {
        b.hours
            .total_cmp(&a.hours)
            .then_with(|| a.project_id.cmp(&b.project_id))
    });
    out
}

/// Snapshot of everything the dashboard shows for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyMetrics {
    pub date: NaiveDate,
    pub total_hours: f64,
    pub billable_hours: f64,
    pub billable_rate: u32,
    pub entry_count: usize,
    pub worked_seconds: i64,
}

impl DailyMetrics {
    pub fn compute(
        entries: &[TimeLogEntry],
        day: NaiveDate,
        live: Option<LiveTimer>,
        worked_seconds: i64,
    ) -> Self {
        let total = total_hours(entries, day, live);
        let billable = billable_hours(entries, day, live);

        Self {
            date: day,
            total_hours: total,
            billable_hours: billable,
            billable_rate: billable_rate(billable, total),
            entry_count: entries.iter().filter(|e| e.date == day).count(),
            worked_seconds,
        }
    }
}
