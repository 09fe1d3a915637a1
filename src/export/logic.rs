use crate::core::ticket::TicketLogic;
use crate::db::log::audit_quietly;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TicketExport;
use crate::export::xlsx::export_xlsx;
use crate::models::filter::TicketFilter;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the ticket report.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the tickets selected by `filter`.
    ///
    /// - `file` must be an absolute path
    /// - an existing file is replaced only with `force` or after confirmation
    /// - an empty selection writes nothing
    ///
    /// Returns the number of exported tickets.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &Path,
        filter: TicketFilter,
        force: bool,
    ) -> AppResult<usize> {
        if !file.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                file.display()
            )));
        }

        let report = TicketLogic::list(pool, filter)?;

        if report.is_empty() {
            warning("No tickets found for the selected filter.");
            return Ok(0);
        }

        ensure_writable(file, force)?;

        let rows = TicketExport::from_report(&report);

        match format {
            ExportFormat::Csv => export_csv(&rows, file)?,
            ExportFormat::Json => export_json(&rows, file)?,
            ExportFormat::Xlsx => export_xlsx(&rows, file)?,
        }

        audit_quietly(
            &pool.conn,
            "export",
            &file.to_string_lossy(),
            &format!("Exported {} tickets as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}
