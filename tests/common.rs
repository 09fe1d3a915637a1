#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rticket")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rticket.sqlite", name));
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

pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_employee(db_path: &str, name: &str, cpf: &str) {
    rti()
        .args(["--db", db_path, "employee", "add", "--name", name, "--cpf", cpf])
        .assert()
        .success();
}

pub fn add_ticket(db_path: &str, employee_id: i32, quantity: i32) {
    let employee = employee_id.to_string();
    let quantity = quantity.to_string();
    rti()
        .args([
            "--db",
            db_path,
            "ticket",
            "add",
            "--employee",
            &employee,
            "--quantity",
            &quantity,
        ])
        .assert()
        .success();
}

/// Initialize DB with two employees (#1 John, #2 Jane) and three tickets:
/// #1 John qty 5, #2 John qty 3, #3 Jane qty 10
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    add_employee(db_path, "John Doe", "12345678901");
    add_employee(db_path, "Jane Smith", "98765432109");

    add_ticket(db_path, 1, 5);
    add_ticket(db_path, 1, 3);
    add_ticket(db_path, 2, 10);
}
