//! Formatting utilities used for CLI outputs.

use regex::Regex;
use std::sync::OnceLock;

fn ansi_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok()).as_ref()
}

/// Remove ANSI colour sequences, e.g. before measuring visible width.
pub fn strip_ansi(s: &str) -> String {
    match ansi_re() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Minutes as `04h 10m` (or `04:10` when `short`).
pub fn mins2readable(mins: i64, short: bool) -> String {
    let hours = mins / 60;
    let minutes = mins % 60;

    if short {
        format!("{:02}:{:02}", hours, minutes)
    } else {
        format!("{:02}h {:02}m", hours, minutes)
    }
}
