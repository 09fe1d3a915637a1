use crate::db::pool::DbPool;
use crate::db::queries::count;
use crate::models::status::Status;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

// served by idx_tickets_created_at
const FIRST_TICKET_SQL: &str = "SELECT created_at FROM tickets ORDER BY created_at ASC LIMIT 1";
const LAST_TICKET_SQL: &str = "SELECT created_at FROM tickets ORDER BY created_at DESC LIMIT 1";

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) RECORD COUNTS
    //
    for (label, table) in [("Employees", "employees"), ("Tickets", "tickets")] {
        let total = count(&pool.conn, table, None)?;
        let active = count(&pool.conn, table, Some(Status::Active))?;
        println!(
            "{}• {}:{} {}{}{} ({} active, {} inactive)",
            CYAN,
            label,
            RESET,
            GREEN,
            total,
            RESET,
            active,
            total - active
        );
    }

    //
    // 3) TICKET DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(FIRST_TICKET_SQL, [], |row| row.get(0))
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(LAST_TICKET_SQL, [], |row| row.get(0))
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Tickets created:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
