use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rtimetracker::config::Config;
use rtimetracker::core::logic::Core;
use rtimetracker::core::workday::{DEFAULT_STORAGE_KEY, Workday};
use rtimetracker::db::migrate::run_pending_migrations;
use rtimetracker::db::pool::DbPool;
use rtimetracker::db::queries::{load_entries_by_date, load_log};
use rtimetracker::db::store::SqliteStore;
use rtimetracker::models::attendance::AttendanceStatus;
use rtimetracker::models::entry::ManualEntry;
use rtimetracker::models::project::{ProjectDirectory, default_projects};
use rtimetracker::store::StateStore;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn migrated_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("in-memory db");
    run_pending_migrations(&pool.conn).expect("migrations");
    pool
}

#[test]
fn test_migrations_are_idempotent() {
    let pool = migrated_pool();
    run_pending_migrations(&pool.conn).expect("second run");

    let applied = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|(_, _, op, _, _)| op == "migration_applied")
        .count();
    assert_eq!(applied, 2);
}

#[test]
fn test_state_roundtrip_and_overwrite() {
    let pool = migrated_pool();
    let mut store = SqliteStore::new(&pool.conn);

    assert_eq!(store.get_raw("k").unwrap(), None);
    store.put_raw("k", "one").unwrap();
    store.put_raw("k", "two").unwrap();
    assert_eq!(store.get_raw("k").unwrap(), Some("two".to_string()));

    store.remove("k").unwrap();
    assert_eq!(store.get_raw("k").unwrap(), None);
}

#[test]
fn test_corrupt_state_is_an_error() {
    let pool = migrated_pool();
    let mut store = SqliteStore::new(&pool.conn);
    store.put_raw(DEFAULT_STORAGE_KEY, "{not json").unwrap();

    let opened = Workday::open(
        store,
        DEFAULT_STORAGE_KEY,
        ProjectDirectory::new(default_projects()),
        day(),
    );
    assert!(opened.is_err());
}

#[test]
fn test_workday_persists_in_sqlite() {
    let pool = migrated_pool();
    let projects = ProjectDirectory::new(default_projects());

    {
        let (mut wd, _) = Workday::open(
            SqliteStore::new(&pool.conn),
            DEFAULT_STORAGE_KEY,
            projects.clone(),
            day(),
        )
        .unwrap();

        wd.clock_in(day().and_time(t(9, 0))).unwrap();
        wd.submit_manual_entry(&ManualEntry {
            task_name: "Design review".to_string(),
            date: day(),
            start_time: t(9, 0),
            end_time: t(9, 45),
            project_id: "proj-4".to_string(),
            is_billable: true,
        })
        .unwrap();
    }

    let (wd, report) = Workday::open(
        SqliteStore::new(&pool.conn),
        DEFAULT_STORAGE_KEY,
        projects,
        day(),
    )
    .unwrap();

    assert!(!report.stale_reset);
    assert_eq!(wd.status(), AttendanceStatus::ClockedIn);
    assert_eq!(wd.entries().len(), 1);
    assert_eq!(wd.entries()[0].duration, 0.75);

    let rows = load_entries_by_date(&pool.conn, &day()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].project_id, "proj-4");
    assert_eq!(rows[0].start_time, t(9, 0));
    assert!(rows[0].is_billable);
}

fn at(h: u32, m: u32) -> NaiveDateTime {
    day().and_time(t(h, m))
}

#[test]
fn test_failed_clock_out_keeps_timer_and_entries() {
    let pool = migrated_pool();
    let cfg = Config::from_yaml("database: unused.sqlite\n").unwrap();

    {
        let mut wd = Core::open_workday(&pool.conn, &cfg, at(9, 0)).unwrap();
        wd.clock_in(at(9, 0)).unwrap();
        wd.start_timer("proj-1", "Write report", true, at(9, 0)).unwrap();
    }

    // refuse to store a clocked-out record
    pool.conn
        .execute_batch(
            r#"CREATE TRIGGER reject_clock_out BEFORE UPDATE ON state
               WHEN NEW.value LIKE '%"ClockedOut"%'
               BEGIN SELECT RAISE(ABORT, 'state write rejected'); END;"#,
        )
        .unwrap();

    let result = Core::in_transaction(&pool.conn, |conn| {
        let mut wd = Core::open_workday(conn, &cfg, at(10, 0))?;
        wd.clock_out(at(10, 0))
    });
    assert!(result.is_err());

    pool.conn
        .execute_batch("DROP TRIGGER reject_clock_out;")
        .unwrap();

    let wd = Core::open_workday(&pool.conn, &cfg, at(10, 5)).unwrap();
    assert_eq!(wd.status(), AttendanceStatus::ClockedIn);
    assert!(wd.entries().is_empty());
    assert_eq!(
        wd.timer().map(|s| s.task_name.as_str()),
        Some("Write report")
    );
    assert!(load_entries_by_date(&pool.conn, &day()).unwrap().is_empty());
}

#[test]
fn test_transaction_commits_on_success() {
    let pool = migrated_pool();
    let cfg = Config::from_yaml("database: unused.sqlite\n").unwrap();

    Core::in_transaction(&pool.conn, |conn| {
        let mut wd = Core::open_workday(conn, &cfg, at(9, 0))?;
        wd.clock_in(at(9, 0))?;
        wd.start_timer("proj-1", "Write report", true, at(9, 0))?;
        wd.clock_out(at(11, 0))
    })
    .unwrap();

    let wd = Core::open_workday(&pool.conn, &cfg, at(11, 5)).unwrap();
    assert_eq!(wd.status(), AttendanceStatus::ClockedOut);
    assert_eq!(wd.entries().len(), 1);
    assert_eq!(wd.entries()[0].duration, 2.0);
    assert!(wd.timer().is_none());
}
