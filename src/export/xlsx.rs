use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{get_headers, ticket_to_row};
use crate::export::{TicketExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with a styled header, banded rows and fitted column widths.
/// The last row holds the quantity total.
pub(crate) fn export_xlsx(rows: &[TicketExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Tickets").map_err(to_export_error)?;

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, ticket) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in ticket_to_row(ticket).iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, headers[col], value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // total under the quantity column
    let total_row = (rows.len() + 1) as u32;
    let total: i64 = rows.iter().map(|r| i64::from(r.quantity)).sum();
    let total_format = Format::new().set_bold().set_border(FormatBorder::Thin);
    worksheet
        .write_with_format(total_row, 2, "Total", &total_format)
        .map_err(to_export_error)?;
    worksheet
        .write_with_format(total_row, 3, total as f64, &total_format)
        .map_err(to_export_error)?;

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", rows.len(), path);
    Ok(())
}

/// Native value a cell is written as.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CellValue<'a> {
    Number(f64),
    Date(&'static str, f64),
    Text(&'a str),
}

/// Only numeric and timestamp columns are converted; names and status
/// codes are kept verbatim.
fn cell_value<'a>(header: &str, s: &'a str) -> CellValue<'a> {
    match header {
        "id" | "employee_id" | "quantity" => s
            .parse::<f64>()
            .map(CellValue::Number)
            .unwrap_or(CellValue::Text(s)),
        "created_at" | "updated_at" => parse_to_excel_date(s)
            .map(|(fmt, serial)| CellValue::Date(fmt, serial))
            .unwrap_or(CellValue::Text(s)),
        _ => CellValue::Text(s),
    }
}

/// Write a single cell, storing timestamps and numbers as native values.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    header: &str,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let written = match cell_value(header, s) {
        CellValue::Date(num_format, serial) => {
            let fmt = base.set_num_format(num_format);
            worksheet.write_with_format(row, col, serial, &fmt)
        }
        CellValue::Number(num) => {
            let fmt = base.set_align(FormatAlign::Right);
            worksheet.write_with_format(row, col, num, &fmt)
        }
        CellValue::Text(text) => worksheet.write_with_format(row, col, text, &base),
    };
    written.map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_names_stay_text() {
        assert_eq!(cell_value("employee", "007"), CellValue::Text("007"));
        assert_eq!(
            cell_value("employee", "2025-01-01 10:00"),
            CellValue::Text("2025-01-01 10:00")
        );
        assert_eq!(cell_value("status", "A"), CellValue::Text("A"));
    }

    #[test]
    fn numeric_and_timestamp_columns_are_converted() {
        assert_eq!(cell_value("quantity", "12"), CellValue::Number(12.0));
        assert!(matches!(
            cell_value("created_at", "1900-01-01 12:00:00"),
            CellValue::Date(_, serial) if (serial - 2.5).abs() < 1e-9
        ));
        assert_eq!(cell_value("updated_at", ""), CellValue::Text(""));
    }
}
