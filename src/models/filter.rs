use super::{status::Status, ticket::Ticket};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Optional-field query descriptor used to narrow the ticket listing.
/// Every present field is a predicate; predicates are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TicketFilter {
    pub employee_id: Option<i32>,
    pub start: Option<DateTime<Local>>,
    pub end: Option<DateTime<Local>>,
    pub status: Option<Status>,
}

impl TicketFilter {
    pub fn for_employee(employee_id: i32) -> Self {
        Self {
            employee_id: Some(employee_id),
            ..Self::default()
        }
    }

    pub fn between(start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.employee_id.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.status.is_none()
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(id) = self.employee_id
            && ticket.employee_id != id
        {
            return false;
        }

        if let Some(start) = self.start
            && ticket.created_at < start
        {
            return false;
        }

        if let Some(end) = self.end
            && ticket.created_at > end
        {
            return false;
        }

        match self.status {
            Some(wanted) => ticket.status == wanted,
            // no status requested: show both active and inactive
            None => matches!(ticket.status, Status::Active | Status::Inactive),
        }
    }
}
