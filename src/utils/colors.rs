//! ANSI color helper utilities for terminal output.

use crate::models::status::Status;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Active → green, inactive → grey.
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Active => GREEN,
        Status::Inactive => GREY,
    }
}

/// Grey out empty placeholders ("" or "--").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
