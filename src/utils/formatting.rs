//! Formatting utilities used for CLI and export outputs.

use chrono::{DateTime, Local};
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI escape pattern"));

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Terminal columns taken by `s` once colour codes are removed.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Format a timestamp with the configured pattern.
pub fn fmt_timestamp(ts: &DateTime<Local>, pattern: &str) -> String {
    ts.format(pattern).to_string()
}

/// Same as [`fmt_timestamp`], "--" when unset.
pub fn fmt_optional_timestamp(ts: &Option<DateTime<Local>>, pattern: &str) -> String {
    ts.as_ref()
        .map(|t| fmt_timestamp(t, pattern))
        .unwrap_or_else(|| "--".to_string())
}

/// Mask a CPF for display: `123.456.789-01`. Other lengths are shown as-is.
pub fn fmt_cpf(cpf: &str) -> String {
    let digits: Vec<char> = cpf.chars().collect();
    if digits.len() != 11 {
        return cpf.to_string();
    }

    let part = |a: usize, b: usize| digits[a..b].iter().collect::<String>();
    format!("{}.{}.{}-{}", part(0, 3), part(3, 6), part(6, 9), part(9, 11))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_is_punctuated() {
        assert_eq!(fmt_cpf("12345678901"), "123.456.789-01");
        assert_eq!(fmt_cpf("123"), "123");
    }

    #[test]
    fn colour_codes_take_no_width() {
        let painted = format!("{}Active{}", crate::utils::colors::GREEN, crate::utils::colors::RESET);
        assert_eq!(strip_ansi(&painted), "Active");
        assert_eq!(visible_width(&painted), 6);
    }

    #[test]
    fn missing_timestamp_is_dashes() {
        assert_eq!(fmt_optional_timestamp(&None, "%Y"), "--");
    }
}
