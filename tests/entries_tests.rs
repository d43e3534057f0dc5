use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{DAY, at, cell_on_line, init_db, init_db_with_entries, rti, setup_test_db};

#[test]
fn test_add_and_list_entries() {
    let db_path = setup_test_db("add_and_list");
    init_db_with_entries(&db_path);

    rti()
        .args(["--db", &db_path, "list", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("Build API"))
        .stdout(contains("3h 0m"))
        .stdout(contains("Team sync"))
        .stdout(contains("Marketing Campaign Setup"))
        .stdout(contains("0h 30m"))
        .stdout(contains("2 entries, 3h 30m in total"));
}

#[test]
fn test_list_defaults_to_today() {
    let db_path = setup_test_db("list_defaults_today");
    init_db_with_entries(&db_path);

    rti()
        .args(["--db", &db_path, "--at", &at("18:00"), "list"])
        .assert()
        .success()
        .stdout(contains("Build API"));

    rti()
        .args(["--db", &db_path, "--at", "2025-09-02 18:00", "list"])
        .assert()
        .success()
        .stdout(contains("No time entries for 2025-09-02"));
}

#[test]
fn test_list_all_newest_date_first() {
    let db_path = setup_test_db("list_all_order");
    init_db(&db_path);

    for (date, task) in [("2025-08-30", "Older task"), ("2025-09-02", "Newer task")] {
        rti()
            .args([
                "--db", &db_path, "add", "--task", task, "--date", date, "--start", "09:00",
                "--end", "10:00",
            ])
            .assert()
            .success();
    }

    let output = rti()
        .args(["--db", &db_path, "list", "--all"])
        .output()
        .expect("run list");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let newer = stdout.find("Newer task").expect("newer listed");
    let older = stdout.find("Older task").expect("older listed");
    assert!(newer < older, "entries must be listed newest date first");
}

#[test]
fn test_list_aligns_wide_task_names() {
    let db_path = setup_test_db("list_wide_names");
    init_db(&db_path);

    for (task, start, end) in [("设计评审", "09:00", "10:00"), ("Build API", "10:00", "11:00")] {
        rti()
            .args([
                "--db", &db_path, "add", "--task", task, "--date", DAY, "--start", start, "--end",
                end,
            ])
            .assert()
            .success();
    }

    let output = rti()
        .args(["--db", &db_path, "list", "--date", DAY])
        .output()
        .expect("run list");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let project = "HRMS Phase 1 Development";
    assert_eq!(
        cell_on_line(&stdout, "设计评审", project),
        cell_on_line(&stdout, "Build API", project)
    );
}

#[test]
fn test_add_rejects_end_before_start() {
    let db_path = setup_test_db("add_end_before_start");
    init_db(&db_path);

    rti()
        .args([
            "--db", &db_path, "add", "--task", "X", "--date", DAY, "--start", "10:00", "--end",
            "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("must be later than start time"))
        .stderr(contains("0h 0m"));

    rti()
        .args(["--db", &db_path, "list", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("No time entries"));
}

#[test]
fn test_add_rejects_equal_times_and_blank_task() {
    let db_path = setup_test_db("add_equal_times");
    init_db(&db_path);

    rti()
        .args([
            "--db", &db_path, "add", "--task", "X", "--date", DAY, "--start", "10:00", "--end",
            "10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time entry"));

    rti()
        .args([
            "--db", &db_path, "add", "--task", "   ", "--date", DAY, "--start", "10:00", "--end",
            "11:00",
        ])
        .assert()
        .failure()
        .stderr(contains("task name is required"));
}

#[test]
fn test_add_rejects_bad_input() {
    let db_path = setup_test_db("add_bad_input");
    init_db(&db_path);

    rti()
        .args([
            "--db", &db_path, "add", "--task", "X", "--date", DAY, "--start", "9am", "--end",
            "10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 9am"));

    rti()
        .args([
            "--db",
            &db_path,
            "add",
            "--task",
            "X",
            "--date",
            "2025-13-01",
            "--start",
            "09:00",
            "--end",
            "10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    rti()
        .args([
            "--db", &db_path, "add", "--task", "X", "--date", DAY, "--start", "09:00", "--end",
            "10:00", "--project", "nope",
        ])
        .assert()
        .failure()
        .stderr(contains("Unknown project: nope"));
}

#[test]
fn test_billable_rate_in_status() {
    let db_path = setup_test_db("billable_rate");
    init_db_with_entries(&db_path);

    // 3h billable out of 3.5h
    rti()
        .args(["--db", &db_path, "--at", &at("14:00"), "status"])
        .assert()
        .success()
        .stdout(contains("Total today : 3h 30m"))
        .stdout(contains("Billable    : 3h 0m"))
        .stdout(contains("86%"))
        .stdout(contains("Entries     : 2"))
        .stdout(contains("HRMS Phase 1 Development"))
        .stdout(contains("Marketing Campaign Setup"));
}

#[test]
fn test_delete_entry() {
    let db_path = setup_test_db("delete_entry");
    init_db_with_entries(&db_path);

    rti()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted entry #1 'Build API'"));

    rti()
        .args(["--db", &db_path, "list", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("Team sync").and(contains("Build API").not()));
}

#[test]
fn test_delete_declined_keeps_entry() {
    let db_path = setup_test_db("delete_declined");
    init_db_with_entries(&db_path);

    rti()
        .args(["--db", &db_path, "del", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rti()
        .args(["--db", &db_path, "list", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("Team sync"));
}

#[test]
fn test_delete_unknown_entry_fails() {
    let db_path = setup_test_db("delete_unknown");
    init_db_with_entries(&db_path);

    rti()
        .args(["--db", &db_path, "del", "99", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No time entry with id 99"));
}

#[test]
fn test_ids_are_not_reused_after_delete_of_older_entry() {
    let db_path = setup_test_db("ids_not_reused");
    init_db_with_entries(&db_path);

    rti()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success();

    rti()
        .args([
            "--db", &db_path, "add", "--task", "Follow-up", "--date", DAY, "--start", "15:00",
            "--end", "16:00",
        ])
        .assert()
        .success()
        .stdout(contains("#3 'Follow-up'"));
}

#[test]
fn test_projects_listing() {
    let db_path = setup_test_db("projects_listing");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "projects"])
        .assert()
        .success()
        .stdout(contains("proj-1"))
        .stdout(contains("HRMS Phase 1 Development"))
        .stdout(contains("Client X - Project Alpha"));
}
