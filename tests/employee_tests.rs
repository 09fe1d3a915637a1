use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_employee, init_db, rti, setup_test_db};

#[test]
fn test_employee_add_and_list() {
    let db_path = setup_test_db("employee_add_and_list");
    init_db(&db_path);

    rti()
        .args([
            "--db", &db_path, "employee", "add", "--name", "John Doe", "--cpf", "12345678901",
        ])
        .assert()
        .success()
        .stdout(contains("Employee #1 'John Doe' created"));

    rti()
        .args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("John Doe"))
        .stdout(contains("123.456.789-01"))
        .stdout(contains("Active"));
}

#[test]
fn test_employee_list_empty() {
    let db_path = setup_test_db("employee_list_empty");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("No employees registered yet."));
}

#[test]
fn test_employee_duplicate_cpf_is_rejected() {
    let db_path = setup_test_db("employee_duplicate_cpf");
    init_db(&db_path);
    add_employee(&db_path, "John Doe", "12345678901");

    rti()
        .args([
            "--db", &db_path, "employee", "add", "--name", "Copy Cat", "--cpf", "12345678901",
        ])
        .assert()
        .failure()
        .stderr(contains("This CPF already exists."));

    rti()
        .args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("Copy Cat").not());
}

#[test]
fn test_employee_short_cpf_is_rejected() {
    let db_path = setup_test_db("employee_short_cpf");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "employee", "add", "--name", "Shorty", "--cpf", "123"])
        .assert()
        .failure()
        .stderr(contains("CPF must contain exactly 11 digits."));
}

#[test]
fn test_employee_status_update() {
    let db_path = setup_test_db("employee_status_update");
    init_db(&db_path);
    add_employee(&db_path, "John Doe", "12345678901");

    rti()
        .args(["--db", &db_path, "employee", "status", "1", "I"])
        .assert()
        .success()
        .stdout(contains("is now inactive"));

    rti()
        .args(["--db", &db_path, "employee", "show", "1"])
        .assert()
        .success()
        .stdout(contains("John Doe"))
        .stdout(contains("Inactive"));
}

#[test]
fn test_employee_status_invalid_code() {
    let db_path = setup_test_db("employee_status_invalid_code");
    init_db(&db_path);
    add_employee(&db_path, "John Doe", "12345678901");

    rti()
        .args(["--db", &db_path, "employee", "status", "1", "X"])
        .assert()
        .failure()
        .stderr(contains("Invalid status code: X"));
}

#[test]
fn test_employee_show_missing() {
    let db_path = setup_test_db("employee_show_missing");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "employee", "show", "42"])
        .assert()
        .failure()
        .stderr(contains("Employee #42 not found"));
}

#[test]
fn test_check_cpf_with_exclusion() {
    let db_path = setup_test_db("employee_check_cpf_exclusion");
    init_db(&db_path);
    add_employee(&db_path, "John Doe", "12345678901");

    rti()
        .args(["--db", &db_path, "employee", "check-cpf", "12345678901"])
        .assert()
        .failure()
        .stderr(contains("This CPF already exists."));

    rti()
        .args([
            "--db", &db_path, "employee", "check-cpf", "12345678901", "--exclude", "1",
        ])
        .assert()
        .success()
        .stdout(contains("is valid"));
}
