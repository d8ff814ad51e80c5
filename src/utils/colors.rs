//! ANSI color helper utilities for terminal output.

use crate::core::age::AgeBucket;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Age column color:
/// days → green, weeks → cyan, months → blue, years → magenta.
/// Negative magnitudes (birth date in the future) → red.
pub fn color_for_age(bucket: AgeBucket, magnitude: i64) -> &'static str {
    if magnitude < 0 {
        return RED;
    }
    match bucket {
        AgeBucket::Days => GREEN,
        AgeBucket::Weeks => CYAN,
        AgeBucket::Months => BLUE,
        AgeBucket::Years => MAGENTA,
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
