use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{at, init_db, rti, run_at, setup_test_db};

#[test]
fn test_clock_in_and_out() {
    let db_path = setup_test_db("clock_in_and_out");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "--at", &at("09:00"), "clock", "in"])
        .assert()
        .success()
        .stdout(contains("Clocked in at 09:00:00"));

    rti()
        .args(["--db", &db_path, "--at", &at("09:30"), "status"])
        .assert()
        .success()
        .stdout(contains("Clocked In"))
        .stdout(contains("00:30:00"));

    rti()
        .args(["--db", &db_path, "--at", &at("17:00"), "clock", "out"])
        .assert()
        .success()
        .stdout(contains("Clocked out at 17:00:00"));

    rti()
        .args(["--db", &db_path, "--at", &at("17:05"), "status"])
        .assert()
        .success()
        .stdout(contains("Clocked Out"))
        .stdout(contains("08:00:00"));
}

#[test]
fn test_status_before_clock_in() {
    let db_path = setup_test_db("status_before_clock_in");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "--at", &at("08:00"), "status"])
        .assert()
        .success()
        .stdout(contains("Ready to Start"))
        .stdout(contains("--:--:--"));
}

#[test]
fn test_break_excluded_from_worked_time() {
    let db_path = setup_test_db("break_excluded");
    init_db(&db_path);

    run_at(&db_path, "09:00", &["clock", "in"]);
    run_at(&db_path, "12:00", &["break", "start"]);

    rti()
        .args(["--db", &db_path, "--at", &at("12:20"), "status"])
        .assert()
        .success()
        .stdout(contains("On Break"))
        .stdout(contains("03:00:00"));

    run_at(&db_path, "12:30", &["break", "end"]);

    // 09:00 → 14:00 minus a 30 minute break
    rti()
        .args(["--db", &db_path, "--at", &at("14:00"), "status"])
        .assert()
        .success()
        .stdout(contains("Clocked In"))
        .stdout(contains("04:30:00"))
        .stdout(contains("12:00:00 → 12:30:00"));
}

#[test]
fn test_end_break_twice_is_ignored() {
    let db_path = setup_test_db("end_break_twice");
    init_db(&db_path);

    run_at(&db_path, "09:00", &["clock", "in"]);
    run_at(&db_path, "12:00", &["break", "start"]);
    run_at(&db_path, "12:30", &["break", "end"]);

    rti()
        .args(["--db", &db_path, "--at", &at("12:40"), "break", "end"])
        .assert()
        .success()
        .stdout(contains("Cannot end a break"))
        .stdout(contains("Nothing changed"));

    rti()
        .args(["--db", &db_path, "--at", &at("12:45"), "status"])
        .assert()
        .success()
        .stdout(contains("12:00:00 → 12:30:00"));
}

#[test]
fn test_clock_out_closes_open_break() {
    let db_path = setup_test_db("clock_out_closes_break");
    init_db(&db_path);

    run_at(&db_path, "09:00", &["clock", "in"]);
    run_at(&db_path, "16:00", &["break", "start"]);
    run_at(&db_path, "16:30", &["clock", "out"]);

    rti()
        .args(["--db", &db_path, "--at", &at("18:00"), "status"])
        .assert()
        .success()
        .stdout(contains("Clocked Out"))
        .stdout(contains("16:00:00 → 16:30:00"))
        .stdout(contains("07:00:00"));
}

#[test]
fn test_rejected_actions_warn_and_succeed() {
    let db_path = setup_test_db("rejected_actions");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "--at", &at("08:00"), "break", "start"])
        .assert()
        .success()
        .stdout(contains("Cannot start a break"));

    rti()
        .args(["--db", &db_path, "--at", &at("08:00"), "clock", "out"])
        .assert()
        .success()
        .stdout(contains("Cannot clock out"));

    run_at(&db_path, "09:00", &["clock", "in"]);

    rti()
        .args(["--db", &db_path, "--at", &at("09:05"), "clock", "in"])
        .assert()
        .success()
        .stdout(contains("Cannot clock in").and(contains("clocked in since 09:00:00")));
}

#[test]
fn test_no_clock_in_after_clock_out() {
    let db_path = setup_test_db("no_clock_in_after_out");
    init_db(&db_path);

    run_at(&db_path, "09:00", &["clock", "in"]);
    run_at(&db_path, "17:00", &["clock", "out"]);

    rti()
        .args(["--db", &db_path, "--at", &at("18:00"), "clock", "in"])
        .assert()
        .success()
        .stdout(contains("already clocked out today at 17:00:00"));
}

#[test]
fn test_new_day_resets_attendance() {
    let db_path = setup_test_db("new_day_reset");
    init_db(&db_path);

    run_at(&db_path, "09:00", &["clock", "in"]);

    rti()
        .args(["--db", &db_path, "--at", "2025-09-02 08:00", "status"])
        .assert()
        .success()
        .stdout(contains("New day"))
        .stdout(contains("Ready to Start"));

    rti()
        .args(["--db", &db_path, "--at", "2025-09-02 08:30", "clock", "in"])
        .assert()
        .success()
        .stdout(contains("Clocked in at 08:30:00"));
}

#[test]
fn test_invalid_at_value_fails() {
    let db_path = setup_test_db("invalid_at");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "--at", "25:99", "status"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}
