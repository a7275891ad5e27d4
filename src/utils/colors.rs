/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Exams stand out in yellow, weekly meetings in cyan.
pub fn color_for_event(is_exam: bool) -> &'static str {
    if is_exam { YELLOW } else { CYAN }
}

pub fn colorize(value: &str, color: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}
