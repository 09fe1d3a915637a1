use crate::core::ticket::TicketReport;
use crate::models::ticket::Ticket;
use serde::Serialize;

/// Flat ticket row for export, with the employee resolved.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TicketExport {
    pub id: i32,
    pub employee_id: i32,
    pub employee: String,
    pub quantity: i32,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TicketExport {
    pub fn from_ticket(report: &TicketReport, t: &Ticket) -> Self {
        Self {
            id: t.id,
            employee_id: t.employee_id,
            employee: report.employee_name(t).to_string(),
            quantity: t.quantity,
            status: t.status.code().to_string(),
            created_at: t.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            updated_at: t
                .updated_at
                .map(|u| u.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn from_report(report: &TicketReport) -> Vec<Self> {
        report
            .tickets
            .iter()
            .map(|t| Self::from_ticket(report, t))
            .collect()
    }
}

/// Header for XLSX, same order as the serialized fields.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "employee_id",
        "employee",
        "quantity",
        "status",
        "created_at",
        "updated_at",
    ]
}

pub(crate) fn ticket_to_row(t: &TicketExport) -> Vec<String> {
    vec![
        t.id.to_string(),
        t.employee_id.to_string(),
        t.employee.clone(),
        t.quantity.to_string(),
        t.status.clone(),
        t.created_at.clone(),
        t.updated_at.clone(),
    ]
}
