mod common;
use common::{init_db, init_db_with_data, rti, setup_test_db, temp_out};
use predicates::str::contains;
use std::path::Path;

#[test]
fn test_init_runs_migrations() {
    let db_path = setup_test_db("maintenance_init");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"));
}

#[test]
fn test_db_info_counts_records() {
    let db_path = setup_test_db("maintenance_db_info");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db_path = setup_test_db("maintenance_db_migrate");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "db", "--migrate", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Schema already up to date."))
        .stdout(contains("Vacuum completed."));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("maintenance_log_operations");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("employee_add"))
        .stdout(contains("ticket_add"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("maintenance_backup");
    init_db_with_data(&db_path);

    let plain = temp_out("maintenance_backup", "sqlite");
    rti()
        .args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success();
    assert!(Path::new(&plain).exists());

    let zipped = temp_out("maintenance_backup_zip", "zip");
    let base = zipped.trim_end_matches(".zip").to_string();
    rti()
        .args(["--db", &db_path, "backup", "--file", &base, "--compress"])
        .assert()
        .success();
    assert!(Path::new(&zipped).exists());
}
