use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// Colour of an operation name in the log listing.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "employee_add" | "ticket_add" => Colour::Green,
        "employee_status" | "ticket_update" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// One row of the internal `log` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: i32,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// Operation and target in a single column.
    fn op_target(&self) -> String {
        if self.target.is_empty() {
            self.operation.clone()
        } else {
            format!("{} ({})", self.operation, self.target)
        }
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &DbPool) -> AppResult<Vec<LogEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = Self::load(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| e.op_target().len())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in &entries {
            let line = render_op_target(&e.operation, &e.op_target());
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&line).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                line,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

/// Truncate to the column width (ignoring ANSI codes) and colour only the
/// operation word.
fn render_op_target(operation: &str, op_target: &str) -> String {
    let color = color_for_operation(operation);

    let visible = if op_target.chars().count() > MAX_OP_WIDTH {
        let mut s: String = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        op_target.to_string()
    };

    match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::log::audit;

    #[test]
    fn rendered_operation_keeps_visible_text() {
        let line = render_op_target("ticket_add", "ticket_add (#3)");
        assert_eq!(strip_ansi(&line), "ticket_add (#3)");
    }

    #[test]
    fn long_targets_are_truncated() {
        let long = format!("export ({})", "x".repeat(100));
        let line = render_op_target("export", &long);
        let visible = strip_ansi(&line);
        assert_eq!(visible.chars().count(), MAX_OP_WIDTH);
        assert!(visible.ends_with("..."));
    }

    #[test]
    fn load_returns_audit_rows_in_order() {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        audit(&pool.conn, "employee_add", "#1", "Employee created").unwrap();

        let entries = LogLogic::load(&pool).unwrap();
        let last = entries.last().unwrap();

        assert!(entries.iter().any(|e| e.operation == "migration_applied"));
        assert_eq!(last.operation, "employee_add");
        assert_eq!(last.target, "#1");
    }
}
