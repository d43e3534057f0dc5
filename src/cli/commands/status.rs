use crate::config::Config;
use crate::core::logic::Core;
use crate::core::workday::Workday;
use crate::errors::AppResult;
use crate::store::{EntryRepository, StateStore};
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_rate, color_for_status, colorize_optional};
use crate::utils::formatting::{bold, opt_clock};
use crate::utils::time::{format_duration, format_seconds, time_str};
use chrono::NaiveDateTime;

/// Print the attendance card, the running timer and today's totals.
pub fn handle(cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    let pool = Core::open_db(cfg)?;
    let workday = Core::open_workday(&pool.conn, cfg, now)?;

    header(format!("Today {}", workday.today()));
    print_attendance(&workday, now);
    print_timer(&workday, now);
    print_totals(&workday, now);

    Ok(())
}

fn print_attendance<S: StateStore + EntryRepository>(workday: &Workday<S>, now: NaiveDateTime) {
    let record = workday.attendance();
    let color = color_for_status(record.status);

    println!(
        "Status      : {}{}{}",
        color,
        bold(record.status_text()),
        RESET
    );
    println!("Clock in    : {}", colorize_optional(&opt_clock(record.clock_in)));
    println!("Clock out   : {}", colorize_optional(&opt_clock(record.clock_out)));

    if record.break_start.is_some() {
        println!(
            "Last break  : {} → {}",
            opt_clock(record.break_start),
            colorize_optional(&opt_clock(record.break_end))
        );
    }

    println!(
        "Worked      : {}",
        format_seconds(workday.tracker().worked_seconds(now))
    );
}

fn print_timer<S: StateStore + EntryRepository>(workday: &Workday<S>, now: NaiveDateTime) {
    println!();
    match workday.timer() {
        Some(session) => {
            println!(
                "⏱️  Timer    : {} running since {}",
                format_seconds(workday.elapsed_seconds(now)),
                time_str(session.started_at.time())
            );
            println!(
                "   Task     : {} ({}){}",
                session.task_name,
                workday.projects().name_of(&session.project_id),
                if session.is_billable { ", billable" } else { "" }
            );
        }
        None if workday.can_start_timer() => println!("⏱️  Timer    : idle"),
        None => println!("⏱️  Timer    : unavailable"),
    }
}

fn print_totals<S: StateStore + EntryRepository>(workday: &Workday<S>, now: NaiveDateTime) {
    let metrics = workday.metrics(now);
    let rate_color = color_for_rate(metrics.billable_rate);

    println!();
    println!(
        "Total today : {}",
        colorize_optional(&format_duration(metrics.total_hours))
    );
    println!(
        "Billable    : {} ({}{}%{})",
        format_duration(metrics.billable_hours),
        rate_color,
        metrics.billable_rate,
        RESET
    );
    println!("Entries     : {}", metrics.entry_count);

    let by_project = workday.hours_by_project(workday.today());
    if !by_project.is_empty() {
        println!("\nBy project:");
        for p in by_project {
            println!(
                "  {:<36} {}",
                workday.projects().name_of(&p.project_id),
                format_duration(p.hours)
            );
        }
    }
}
