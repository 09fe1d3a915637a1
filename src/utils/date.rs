//! Date/time parsing for command-line arguments.

use chrono::{
    DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike,
};

/// Accepted formats and whether they carry seconds.
const DATETIME_FORMATS: [(&str, bool); 4] = [
    ("%Y-%m-%d %H:%M:%S", true),
    ("%Y-%m-%dT%H:%M:%S", true),
    ("%Y-%m-%d %H:%M", false),
    ("%Y-%m-%dT%H:%M", false),
];

const LAST_NANO: u32 = 999_999_999;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Attach the local offset to a naive timestamp.
/// In a DST fold the earlier instant wins; in a gap there is no answer.
pub fn to_local(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}

pub fn start_of_day(d: NaiveDate) -> Option<DateTime<Local>> {
    to_local(d.and_time(NaiveTime::MIN))
}

pub fn end_of_day(d: NaiveDate) -> Option<DateTime<Local>> {
    let last = NaiveTime::from_hms_nano_opt(23, 59, 59, LAST_NANO)?;
    to_local(d.and_time(last))
}

/// Which end of the day a bare date stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBound {
    Start,
    End,
}

/// Parse a filter bound: RFC 3339, `YYYY-MM-DD HH:MM[:SS]` or a bare
/// `YYYY-MM-DD`. As an upper bound a date covers its whole day and a
/// time covers its whole minute (or second).
pub fn parse_datetime(s: &str, bound: DayBound) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    for (fmt, has_seconds) in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return match bound {
                DayBound::Start => to_local(naive),
                DayBound::End => to_local(end_of_unit(naive, has_seconds)?),
            };
        }
    }

    let d = parse_date(s)?;
    match bound {
        DayBound::Start => start_of_day(d),
        DayBound::End => end_of_day(d),
    }
}

/// Last instant of the minute (or second) an upper bound names.
fn end_of_unit(naive: NaiveDateTime, has_seconds: bool) -> Option<NaiveDateTime> {
    let second = if has_seconds { naive.second() } else { 59 };
    let time = NaiveTime::from_hms_nano_opt(naive.hour(), naive.minute(), second, LAST_NANO)?;
    Some(naive.date().and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_dates_expand_to_day_bounds() {
        let from = parse_datetime("2025-03-10", DayBound::Start).unwrap();
        let to = parse_datetime("2025-03-10", DayBound::End).unwrap();

        assert_eq!((from.hour(), from.minute()), (0, 0));
        assert_eq!((to.hour(), to.minute(), to.second()), (23, 59, 59));
        assert_eq!(from.date_naive(), to.date_naive());
    }

    #[test]
    fn explicit_times_are_kept() {
        let dt = parse_datetime("2025-03-10 14:30", DayBound::Start).unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (14, 30, 0));
    }

    #[test]
    fn minute_upper_bound_covers_the_whole_minute() {
        let to = parse_datetime("2025-03-10 14:30", DayBound::End).unwrap();
        assert_eq!((to.hour(), to.minute(), to.second()), (14, 30, 59));

        let created = parse_datetime("2025-03-10 14:30:42", DayBound::Start).unwrap();
        assert!(created <= to);

        let next = parse_datetime("2025-03-10 14:31", DayBound::Start).unwrap();
        assert!(next > to);
    }

    #[test]
    fn second_upper_bound_keeps_its_second() {
        let to = parse_datetime("2025-03-10T14:30:15", DayBound::End).unwrap();
        assert_eq!((to.minute(), to.second()), (30, 15));
    }

    #[test]
    fn rfc3339_is_accepted() {
        let dt = parse_datetime("2025-03-10T08:00:00+00:00", DayBound::Start).unwrap();
        let utc = dt.with_timezone(&chrono::Utc);
        assert_eq!(utc.hour(), 8);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_datetime("10/03/2025", DayBound::Start).is_none());
        assert!(parse_date("2025-13-01").is_none());
    }
}
