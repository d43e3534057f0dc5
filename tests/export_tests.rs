mod common;
use common::{DAY, init_db, init_db_with_entries, rti, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_export_entries_csv_all() {
    let db_path = setup_test_db("export_entries_csv_all");
    init_db_with_entries(&db_path);

    let out = temp_out("export_entries_csv_all", "csv");

    rti()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Exported 2 entries"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,date,start_time,end_time,duration,task_name,project_id,project_name,is_billable")
    );
    // oldest first
    assert_eq!(
        lines.next(),
        Some("1,2025-09-01,09:00,12:00,3.0,Build API,proj-1,HRMS Phase 1 Development,true")
    );
    assert!(content.contains("Team sync"));
    assert!(content.contains("false"));
}

#[test]
fn test_export_entries_json_single_date() {
    let db_path = setup_test_db("export_entries_json_date");
    init_db_with_entries(&db_path);

    rti()
        .args([
            "--db", &db_path, "add", "--task", "Other day", "--date", "2025-09-03", "--start",
            "09:00", "--end", "09:30",
        ])
        .assert()
        .success();

    let out = temp_out("export_entries_json_date", "json");

    rti()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--date", DAY,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of entries");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["task_name"], "Build API");
    assert_eq!(rows[0]["duration"], 3.0);
    assert_eq!(rows[1]["project_name"], "Marketing Campaign Setup");
    assert_eq!(rows[1]["is_billable"], false);
    assert!(!content.contains("Other day"));
}

#[test]
fn test_export_empty_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);

    let out = temp_out("export_empty", "csv");

    rti()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = setup_test_db("export_force");
    init_db_with_entries(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "old content").expect("seed file");

    rti()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stdout(contains("already exists. Overwrite it?"))
        .stdout(contains("Confirm [y/N]"))
        .stderr(contains("existing file not overwritten"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "old content");

    rti()
        .args(["--db", &db_path, "export", "--file", &out, "--format", "json"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(contains("Exported 2 entries"));
    assert!(fs::read_to_string(&out).expect("read").contains("\"task_name\": \"Team sync\""));

    rti()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").contains("Build API"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup_db");
    init_db_with_entries(&db_path);

    let plain = temp_out("backup_plain", "sqlite");
    rti()
        .args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&plain).exists());

    let packed = temp_out("backup_packed", "sqlite");
    let zip_path = temp_out("backup_packed", "zip");
    rti()
        .args(["--db", &db_path, "backup", "--file", &packed, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert!(Path::new(&zip_path).exists());
    assert!(!Path::new(&packed).exists());
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_db_with_entries(&db_path);

    let out = temp_out("log_records", "csv");
    rti()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("Build API"))
        .stdout(contains("export"));
}
