/// ANSI color helper utilities for terminal output.
use crate::models::work_status::WorkStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

pub fn color_for_status(status: WorkStatus) -> &'static str {
    match status {
        WorkStatus::NotStarted => GREY,
        WorkStatus::Working => GREEN,
        WorkStatus::OnBreak => YELLOW,
        WorkStatus::Finished => BLUE,
    }
}

/// Grey for placeholder values (`--:--`, empty), unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_status(status: WorkStatus) -> String {
    format!("{}{}{}", color_for_status(status), status.label(), RESET)
}
