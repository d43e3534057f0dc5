#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

pub const DAY: &str = "2025-09-01";

pub fn rti() -> Command {
    cargo_bin_cmd!("rtimetracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimetracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Temporary HOME holding a config file with `yaml` as its content.
pub fn home_with_config(name: &str, yaml: &str) -> String {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_home", name));
    fs::remove_dir_all(&home).ok();

    let dir = home.join(".rtimetracker");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(dir.join("rtimetracker.conf"), yaml).expect("write config");
    home.to_string_lossy().to_string()
}

/// Terminal cell where `needle` starts on the first line of `text` holding `marker`.
pub fn cell_on_line(text: &str, marker: &str, needle: &str) -> usize {
    let line = text
        .lines()
        .find(|l| l.contains(marker))
        .expect("marker line present");
    let byte = line.find(needle).expect("needle on marker line");
    UnicodeWidthStr::width(&line[..byte])
}

/// `--at` value for `HH:MM` on the shared test day.
pub fn at(hhmm: &str) -> String {
    format!("{} {}", DAY, hhmm)
}

/// Fresh DB with schema, no data.
pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Run one command at `hhmm` on the test day and expect success.
pub fn run_at(db_path: &str, hhmm: &str, args: &[&str]) {
    let when = at(hhmm);
    let mut full = vec!["--db", db_path, "--at", when.as_str()];
    full.extend_from_slice(args);
    rti().args(&full).assert().success();
}

/// Fresh DB holding two manual entries on the test day:
/// 3h billable on proj-1 and 30m non-billable on proj-2.
pub fn init_db_with_entries(db_path: &str) {
    init_db(db_path);

    rti()
        .args([
            "--db", db_path, "add", "--task", "Build API", "--date", DAY, "--start", "09:00",
            "--end", "12:00",
        ])
        .assert()
        .success();

    rti()
        .args([
            "--db",
            db_path,
            "add",
            "--task",
            "Team sync",
            "--date",
            DAY,
            "--start",
            "13:00",
            "--end",
            "13:30",
            "--project",
            "proj-2",
            "--non-billable",
        ])
        .assert()
        .success();
}
