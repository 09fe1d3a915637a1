use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Try to read a string as a timestamp, returning the Excel serial number
/// and the number format to display it with.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return naive_datetime_to_excel_serial(&dt).map(|serial| ("yyyy-mm-dd hh:mm:ss", serial));
        }
    }

    None
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    Some(days + secs / 86400.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_serials() {
        let (fmt, serial) = parse_to_excel_date("1900-01-01 12:00:00").unwrap();
        assert_eq!(fmt, "yyyy-mm-dd hh:mm:ss");
        assert!((serial - 2.5).abs() < 1e-9);
        assert!(parse_to_excel_date("Ann").is_none());
    }
}
