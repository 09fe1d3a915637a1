use super::status::Status;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Ticket {
    pub id: i32,                             // ⇔ tickets.id
    pub employee_id: i32,                    // ⇔ tickets.employee_id (FK employees.id)
    pub quantity: i32,                       // ⇔ tickets.quantity
    pub status: Status,                      // ⇔ tickets.status ('A' | 'I')
    pub created_at: DateTime<Local>,         // ⇔ tickets.created_at (RFC 3339)
    pub updated_at: Option<DateTime<Local>>, // ⇔ tickets.updated_at
}

impl Ticket {
    pub fn new(employee_id: i32, quantity: i32) -> Self {
        Self {
            id: 0,
            employee_id,
            quantity,
            status: Status::Active,
            created_at: Local::now(),
            updated_at: None,
        }
    }

    /// Overwrite quantity and status, stamping `updated_at`.
    pub fn apply_update(&mut self, quantity: i32, status: Status) {
        self.quantity = quantity;
        self.status = status;
        self.updated_at = Some(Local::now());
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketInput {
    pub employee_id: i32,
    pub quantity: i32,
}
