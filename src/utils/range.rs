//! `--range` expressions for ticket reports.

use crate::errors::{AppError, AppResult};
use crate::utils::date::{end_of_day, start_of_day};
use chrono::{DateTime, Datelike, Local, NaiveDate};

fn bad(msg: &str, raw: &str) -> AppError {
    AppError::InvalidRange(format!("{msg}: '{raw}'"))
}

/// First and last day covered by a single period: `YYYY`, `YYYY-MM` or
/// `YYYY-MM-DD`.
fn period_days(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| bad("invalid year", p))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| bad("invalid year", p))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| bad("invalid year", p))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| bad("invalid month", p))?;
            let last = last_day_of_month(d1).ok_or_else(|| bad("invalid month", p))?;
            Ok((d1, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| bad("invalid date", p))?;
            Ok((d, d))
        }
        _ => Err(bad("unsupported format", p)),
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = (first.year(), first.month());
    let next = if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1)?
    };
    next.pred_opt()
}

/// Parse a range into inclusive calendar days.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    let (start, end) = match r.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(bad("start and end must have the same format", r));
            }
            (period_days(s)?.0, period_days(e)?.1)
        }
        None => period_days(r)?,
    };

    if start > end {
        return Err(bad("start is after end", r));
    }

    Ok((start, end))
}

/// Same as [`parse_range`], expanded to local timestamps covering the
/// first second of the first day through the last second of the last day.
pub fn parse_range_bounds(r: &str) -> AppResult<(DateTime<Local>, DateTime<Local>)> {
    let (d1, d2) = parse_range(r)?;
    let start = start_of_day(d1).ok_or_else(|| bad("no such local time", r))?;
    let end = end_of_day(d2).ok_or_else(|| bad("no such local time", r))?;
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_periods() {
        assert_eq!(parse_range("2025").unwrap(), (ymd(2025, 1, 1), ymd(2025, 12, 31)));
        assert_eq!(parse_range("2024-02").unwrap(), (ymd(2024, 2, 1), ymd(2024, 2, 29)));
        assert_eq!(parse_range("2025-12").unwrap(), (ymd(2025, 12, 1), ymd(2025, 12, 31)));
        assert_eq!(parse_range("2025-06-15").unwrap(), (ymd(2025, 6, 15), ymd(2025, 6, 15)));
    }

    #[test]
    fn spans() {
        assert_eq!(
            parse_range("2024-09:2025-02").unwrap(),
            (ymd(2024, 9, 1), ymd(2025, 2, 28))
        );
        assert_eq!(parse_range("2023:2024").unwrap(), (ymd(2023, 1, 1), ymd(2024, 12, 31)));
    }

    #[test]
    fn invalid_ranges() {
        assert!(matches!(parse_range("2025:2025-01"), Err(AppError::InvalidRange(_))));
        assert!(matches!(parse_range("2025-13"), Err(AppError::InvalidRange(_))));
        assert!(matches!(parse_range("2026:2025"), Err(AppError::InvalidRange(_))));
        assert!(matches!(parse_range("yesterday"), Err(AppError::InvalidRange(_))));
    }
}
