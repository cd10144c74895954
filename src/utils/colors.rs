/// ANSI color helper utilities for terminal output.
use crate::models::status::Status;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Healthy → green, needs more me-time → yellow
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Healthy => GREEN,
        Status::NeedsMoreMeTime => YELLOW,
    }
}

/// Status label with icon, coloured for the terminal.
pub fn colorize_status(status: Status) -> String {
    format!(
        "{} {}{}{}",
        status.icon(),
        color_for_status(status),
        status.label(),
        RESET
    )
}

pub fn grey(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}
