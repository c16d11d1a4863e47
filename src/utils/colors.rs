/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Delta color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_delta(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

/// Wrap `text` in `color`, greyed out when it is empty or a placeholder.
pub fn colorize(text: &str, color: &str) -> String {
    if text.trim().is_empty() || text.trim() == "--:--" || text.trim() == "00h 00m" {
        format!("{GREY}{text}{RESET}")
    } else {
        format!("{color}{text}{RESET}")
    }
}
