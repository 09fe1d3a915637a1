//! Generic record store.
//!
//! Handlers never talk SQL directly: they receive a `Repository` and use
//! `add`, `find`, `all` and `save`. Filtering is composed in memory over
//! `all()`.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Row};

/// A row type that knows its table and how to read/write itself.
pub trait Record: Sized {
    const TABLE: &'static str;

    fn id(&self) -> i32;
    fn assign_id(&mut self, id: i32);

    fn from_row(row: &Row) -> rusqlite::Result<Self>;
    fn insert(&self, conn: &Connection) -> rusqlite::Result<usize>;
    fn update(&self, conn: &Connection) -> rusqlite::Result<usize>;

    /// Error reported when a lookup by id finds nothing.
    fn not_found(id: i32) -> AppError;
}

/// Minimal store interface used by the employee and ticket logic.
pub trait Repository<T> {
    /// Persist a new record and write the assigned id back into it.
    fn add(&mut self, record: &mut T) -> AppResult<()>;
    fn find(&self, id: i32) -> AppResult<Option<T>>;
    /// All records in insertion (id) order.
    fn all(&self) -> AppResult<Vec<T>>;
    /// Persist changes made to an existing record.
    fn save(&mut self, record: &T) -> AppResult<()>;

    /// Like `find`, but absence is an error.
    fn get(&self, id: i32) -> AppResult<T>
    where
        T: Record,
    {
        self.find(id)?.ok_or_else(|| T::not_found(id))
    }
}

impl<T: Record> Repository<T> for DbPool {
    fn add(&mut self, record: &mut T) -> AppResult<()> {
        record.insert(&self.conn)?;
        let rowid = self.conn.last_insert_rowid();
        let id = i32::try_from(rowid)
            .map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, rowid))?;
        record.assign_id(id);
        Ok(())
    }

    fn find(&self, id: i32) -> AppResult<Option<T>> {
        let sql = format!("SELECT * FROM {} WHERE id = ?1", T::TABLE);
        let mut stmt = self.conn.prepare_cached(&sql)?;
        Ok(stmt.query_row([id], T::from_row).optional()?)
    }

    fn all(&self) -> AppResult<Vec<T>> {
        let sql = format!("SELECT * FROM {} ORDER BY id ASC", T::TABLE);
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt.query_map([], T::from_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn save(&mut self, record: &T) -> AppResult<()> {
        if record.update(&self.conn)? == 0 {
            return Err(T::not_found(record.id()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::models::employee::Employee;
    use crate::models::status::Status;
    use crate::models::ticket::Ticket;

    fn store() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        pool
    }

    #[test]
    fn add_assigns_increasing_ids() {
        let mut pool = store();
        let mut a = Employee::new("Ann", "11111111111");
        let mut b = Employee::new("Bob", "22222222222");
        pool.add(&mut a).unwrap();
        pool.add(&mut b).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        let all: Vec<Employee> = pool.all().unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        let pool = store();
        let found: Option<Ticket> = pool.find(42).unwrap();
        assert!(found.is_none());

        let err = Repository::<Ticket>::get(&pool, 42).unwrap_err();
        assert!(matches!(err, AppError::TicketNotFound(42)));
    }

    #[test]
    fn save_persists_changes() {
        let mut pool = store();
        let mut e = Employee::new("Ann", "11111111111");
        pool.add(&mut e).unwrap();

        e.set_status(Status::Inactive);
        pool.save(&e).unwrap();

        let stored: Employee = pool.get(e.id).unwrap();
        assert_eq!(stored.status, Status::Inactive);
        assert!(stored.updated_at.is_some());
    }

    #[test]
    fn save_of_unknown_record_is_not_found() {
        let mut pool = store();
        let mut ghost = Employee::new("Ghost", "99999999999");
        ghost.id = 7;

        let err = pool.save(&ghost).unwrap_err();
        assert!(matches!(err, AppError::EmployeeNotFound(7)));
    }
}
