//! Row mapping and SQL for the stored record types.

use crate::db::repository::Record;
use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::models::status::Status;
use crate::models::ticket::Ticket;
use chrono::{DateTime, Local};
use rusqlite::{Connection, Result, Row, params};

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn get_timestamp(row: &Row, col: &str) -> Result<DateTime<Local>> {
    let raw: String = row.get(col)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_error(0, AppError::InvalidDate(raw.clone())))
}

fn get_optional_timestamp(row: &Row, col: &str) -> Result<Option<DateTime<Local>>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        None => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Local)))
            .map_err(|_| conversion_error(0, AppError::InvalidDate(s.clone()))),
    }
}

fn get_status(row: &Row) -> Result<Status> {
    let code: String = row.get("status")?;
    Status::from_db_str(&code).ok_or_else(|| conversion_error(0, AppError::InvalidStatus(code)))
}

fn opt_rfc3339(ts: &Option<DateTime<Local>>) -> Option<String> {
    ts.as_ref().map(|t| t.to_rfc3339())
}

impl Record for Employee {
    const TABLE: &'static str = "employees";

    fn id(&self) -> i32 {
        self.id
    }

    fn assign_id(&mut self, id: i32) {
        self.id = id;
    }

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Employee {
            id: row.get("id")?,
            name: row.get("name")?,
            cpf: row.get("cpf")?,
            status: get_status(row)?,
            created_at: get_timestamp(row, "created_at")?,
            updated_at: get_optional_timestamp(row, "updated_at")?,
        })
    }

    fn insert(&self, conn: &Connection) -> Result<usize> {
        conn.execute(
            "INSERT INTO employees (name, cpf, status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                self.name,
                self.cpf,
                self.status.to_db_str(),
                self.created_at.to_rfc3339(),
                opt_rfc3339(&self.updated_at),
            ],
        )
    }

    fn update(&self, conn: &Connection) -> Result<usize> {
        conn.execute(
            "UPDATE employees
             SET name = ?1, cpf = ?2, status = ?3, updated_at = ?4
             WHERE id = ?5",
            params![
                self.name,
                self.cpf,
                self.status.to_db_str(),
                opt_rfc3339(&self.updated_at),
                self.id,
            ],
        )
    }

    fn not_found(id: i32) -> AppError {
        AppError::EmployeeNotFound(id)
    }
}

impl Record for Ticket {
    const TABLE: &'static str = "tickets";

    fn id(&self) -> i32 {
        self.id
    }

    fn assign_id(&mut self, id: i32) {
        self.id = id;
    }

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Ticket {
            id: row.get("id")?,
            employee_id: row.get("employee_id")?,
            quantity: row.get("quantity")?,
            status: get_status(row)?,
            created_at: get_timestamp(row, "created_at")?,
            updated_at: get_optional_timestamp(row, "updated_at")?,
        })
    }

    fn insert(&self, conn: &Connection) -> Result<usize> {
        conn.execute(
            "INSERT INTO tickets (employee_id, quantity, status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                self.employee_id,
                self.quantity,
                self.status.to_db_str(),
                self.created_at.to_rfc3339(),
                opt_rfc3339(&self.updated_at),
            ],
        )
    }

    // created_at is never rewritten
    fn update(&self, conn: &Connection) -> Result<usize> {
        conn.execute(
            "UPDATE tickets
             SET employee_id = ?1, quantity = ?2, status = ?3, updated_at = ?4
             WHERE id = ?5",
            params![
                self.employee_id,
                self.quantity,
                self.status.to_db_str(),
                opt_rfc3339(&self.updated_at),
                self.id,
            ],
        )
    }

    fn not_found(id: i32) -> AppError {
        AppError::TicketNotFound(id)
    }
}

/// Number of rows in a table, optionally restricted to one status.
pub fn count(conn: &Connection, table: &str, status: Option<Status>) -> Result<i64> {
    match status {
        None => conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0)),
        Some(s) => conn.query_row(
            &format!("SELECT COUNT(*) FROM {table} WHERE status = ?1"),
            [s.to_db_str()],
            |r| r.get(0),
        ),
    }
}
