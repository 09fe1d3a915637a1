use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result};

/// One schema step. Applied steps are recorded in the `log` table as
/// `migration_applied` rows whose target is the version string.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251017_0001_create_employees",
        description: "Created employees table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL DEFAULT '',
            cpf         TEXT NOT NULL,
            status      TEXT NOT NULL DEFAULT 'A' CHECK(status IN ('A','I')),
            created_at  TEXT NOT NULL,
            updated_at  TEXT
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_employees_cpf ON employees(cpf);
        "#,
    },
    Migration {
        version: "20251017_0002_create_tickets",
        description: "Created tickets table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS tickets (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  INTEGER NOT NULL REFERENCES employees(id),
            quantity     INTEGER NOT NULL DEFAULT 0,
            status       TEXT NOT NULL DEFAULT 'A' CHECK(status IN ('A','I')),
            created_at   TEXT NOT NULL,
            updated_at   TEXT
        );
        "#,
    },
    Migration {
        version: "20251017_0003_ticket_created_at_index",
        description: "Indexed tickets by creation time",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_tickets_created_at ON tickets(created_at);
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        [Local::now().to_rfc3339().as_str(), m.version, m.description],
    )?;

    tx.commit()
}

/// Versions not yet applied, in order.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Called by `db::initialize::init_db()` and `db --migrate`.
/// Returns the number of steps applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        apply(conn, m)?;
        applied += 1;

        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(applied)
}
