use crate::db::repository::Repository;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::filter::TicketFilter;
use crate::models::status::Status;
use crate::models::ticket::{Ticket, TicketInput};
use serde::Serialize;

/// Filtered ticket listing, plus what a report screen needs around it.
#[derive(Debug, Clone, Serialize)]
pub struct TicketReport {
    pub tickets: Vec<Ticket>,
    /// Every employee, used to populate the employee filter.
    pub employees: Vec<Employee>,
    pub filter: TicketFilter,
}

impl TicketReport {
    pub fn employee(&self, ticket: &Ticket) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == ticket.employee_id)
    }

    pub fn employee_name(&self, ticket: &Ticket) -> &str {
        self.employee(ticket).map(|e| e.name.as_str()).unwrap_or("?")
    }

    pub fn total_quantity(&self) -> i64 {
        self.tickets.iter().map(|t| i64::from(t.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// High-level business logic for tickets.
pub struct TicketLogic;

impl TicketLogic {
    pub fn list<R>(store: &R, filter: TicketFilter) -> AppResult<TicketReport>
    where
        R: Repository<Ticket> + Repository<Employee>,
    {
        let tickets = Repository::<Ticket>::all(store)?
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();
        let employees = Repository::<Employee>::all(store)?;

        Ok(TicketReport {
            tickets,
            employees,
            filter,
        })
    }

    /// Employees that can receive a new ticket.
    pub fn active_employees<R: Repository<Employee>>(store: &R) -> AppResult<Vec<Employee>> {
        Ok(store
            .all()?
            .into_iter()
            .filter(|e| e.status.is_active())
            .collect())
    }

    /// Store a new Active ticket stamped now.
    /// The employee reference is checked by the storage layer only.
    pub fn create<R: Repository<Ticket>>(store: &mut R, input: TicketInput) -> AppResult<Ticket> {
        let mut ticket = Ticket::new(input.employee_id, input.quantity);
        store.add(&mut ticket)?;
        Ok(ticket)
    }

    pub fn update<R: Repository<Ticket>>(
        store: &mut R,
        id: i32,
        quantity: i32,
        status: Status,
    ) -> AppResult<Ticket> {
        let mut ticket = store.get(id)?;

        ticket.apply_update(quantity, status);
        store.save(&ticket)?;

        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::pool::DbPool;
    use crate::errors::AppError;
    use chrono::{Duration, Local};

    /// Employees #1 (active) and #2 (inactive); tickets:
    /// #1 emp 1, A, now-2d | #2 emp 1, I, now-1d | #3 emp 2, A, now
    fn seeded() -> DbPool {
        let mut pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();

        let mut active = Employee::new("Active Employee", "11111111111");
        let mut inactive = Employee::new("Inactive Employee", "22222222222");
        inactive.status = Status::Inactive;
        pool.add(&mut active).unwrap();
        pool.add(&mut inactive).unwrap();

        let now = Local::now();
        for (employee_id, quantity, status, created_at) in [
            (1, 5, Status::Active, now - Duration::days(2)),
            (1, 3, Status::Inactive, now - Duration::days(1)),
            (2, 10, Status::Active, now),
        ] {
            let mut t = Ticket::new(employee_id, quantity);
            t.status = status;
            t.created_at = created_at;
            pool.add(&mut t).unwrap();
        }

        pool
    }

    fn ids(report: &TicketReport) -> Vec<i32> {
        report.tickets.iter().map(|t| t.id).collect()
    }

    #[test]
    fn list_without_filter_returns_all_tickets_and_employees() {
        let pool = seeded();
        let report = TicketLogic::list(&pool, TicketFilter::default()).unwrap();

        assert_eq!(ids(&report), vec![1, 2, 3]);
        assert_eq!(report.employees.len(), 2);
        assert_eq!(report.total_quantity(), 18);
    }

    #[test]
    fn default_status_includes_active_and_inactive() {
        let pool = seeded();
        let report = TicketLogic::list(&pool, TicketFilter::default()).unwrap();

        assert!(report.tickets.iter().any(|t| t.status == Status::Active));
        assert!(report.tickets.iter().any(|t| t.status == Status::Inactive));
    }

    #[test]
    fn filter_by_employee() {
        let pool = seeded();
        let report = TicketLogic::list(&pool, TicketFilter::for_employee(1)).unwrap();

        assert_eq!(ids(&report), vec![1, 2]);
        assert!(report.tickets.iter().all(|t| t.employee_id == 1));
        assert_eq!(report.filter.employee_id, Some(1));
    }

    #[test]
    fn filter_by_date_range() {
        let pool = seeded();
        let now = Local::now();
        let filter = TicketFilter::between(now - Duration::hours(36), now - Duration::hours(12));

        let report = TicketLogic::list(&pool, filter).unwrap();

        assert_eq!(ids(&report), vec![2]);
    }

    #[test]
    fn filter_by_status() {
        let pool = seeded();
        let filter = TicketFilter {
            status: Some(Status::Active),
            ..TicketFilter::default()
        };

        let report = TicketLogic::list(&pool, filter).unwrap();

        assert_eq!(ids(&report), vec![1, 3]);
    }

    #[test]
    fn report_resolves_employee_names() {
        let pool = seeded();
        let report = TicketLogic::list(&pool, TicketFilter::for_employee(2)).unwrap();

        assert_eq!(report.employee_name(&report.tickets[0]), "Inactive Employee");
    }

    #[test]
    fn only_active_employees_are_offered() {
        let pool = seeded();
        let offered = TicketLogic::active_employees(&pool).unwrap();

        assert_eq!(offered.len(), 1);
        assert_eq!(offered[0].name, "Active Employee");
    }

    #[test]
    fn create_stores_active_ticket() {
        let mut pool = seeded();
        let input = TicketInput {
            employee_id: 1,
            quantity: 7,
        };

        let ticket = TicketLogic::create(&mut pool, input).unwrap();

        assert_eq!(ticket.id, 4);
        assert_eq!(ticket.status, Status::Active);
        assert!(ticket.updated_at.is_none());
        let stored: Ticket = pool.get(4).unwrap();
        assert_eq!(stored.quantity, 7);
    }

    #[test]
    fn create_for_missing_employee_fails_in_storage() {
        let mut pool = seeded();
        let input = TicketInput {
            employee_id: 99,
            quantity: 1,
        };

        let err = TicketLogic::create(&mut pool, input).unwrap_err();

        assert!(matches!(err, AppError::Db(_)));
        let all: Vec<Ticket> = pool.all().unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn update_overwrites_quantity_and_status() {
        let mut pool = seeded();

        let t = TicketLogic::update(&mut pool, 1, 42, Status::Inactive).unwrap();

        assert_eq!(t.quantity, 42);
        assert_eq!(t.status, Status::Inactive);
        assert!(t.updated_at.is_some());

        let stored: Ticket = pool.get(1).unwrap();
        assert_eq!(stored, t);
    }

    #[test]
    fn update_of_missing_ticket_is_not_found() {
        let mut pool = seeded();
        let err = TicketLogic::update(&mut pool, 99, 1, Status::Active).unwrap_err();
        assert!(matches!(err, AppError::TicketNotFound(99)));
    }
}
