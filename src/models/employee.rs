use super::status::Status;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Employee {
    pub id: i32,                               // ⇔ employees.id (assigned by the store)
    pub name: String,                          // ⇔ employees.name
    pub cpf: String,                           // ⇔ employees.cpf (UNIQUE, 11 chars)
    pub status: Status,                        // ⇔ employees.status ('A' | 'I')
    pub created_at: DateTime<Local>,           // ⇔ employees.created_at (RFC 3339)
    pub updated_at: Option<DateTime<Local>>,   // ⇔ employees.updated_at (NULL until first change)
}

impl Employee {
    /// Build a not-yet-stored employee: `id = 0`, status Active, stamped now.
    pub fn new(name: impl Into<String>, cpf: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            cpf: cpf.into(),
            status: Status::Active,
            created_at: Local::now(),
            updated_at: None,
        }
    }

    /// Change the status and re-stamp `updated_at`.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.updated_at = Some(Local::now());
    }
}

/// Fields accepted when creating an employee.
/// Status and timestamps are never taken from the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeInput {
    pub name: String,
    pub cpf: String,
}
