//! Entries table as shown in the session.

use crate::models::entry::Entry;
use crate::models::status::Status;
use crate::utils::colors::{colorize_status, grey};
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};

pub const EMPTY_MESSAGE: &str = "No entries yet. Start by adding one!";

/// Render the entries with a leading `#` column used to pick rows for deletion.
pub fn render_entries(entries: &[Entry], separator: char) -> String {
    let columns = [
        "#",
        "Name",
        "Wellness Activity",
        "Me-time Activity",
        "Screen-free Time",
        "Status",
        "Date",
    ]
    .iter()
    .map(|h| Column::new(h))
    .collect();

    let mut table = Table::new(columns).with_separator(separator);

    for (i, e) in entries.iter().enumerate() {
        table.add_row(vec![
            i.to_string(),
            e.name().to_string(),
            e.wellness_activity().to_string(),
            e.me_time_activity().to_string(),
            format!(
                "{} {}",
                e.screen_free_minutes(),
                grey(&format!("({})", mins2readable(e.screen_free_minutes(), false)))
            ),
            colorize_status(e.status()),
            e.date_str(),
        ]);
    }

    table.render()
}

/// One-line status preview, as shown under the form.
pub fn status_preview(status: Status) -> String {
    format!("Status: {}", colorize_status(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validator::EntryValidator;
    use crate::models::entry::EntryInput;
    use crate::utils::formatting::strip_ansi;
    use chrono::NaiveDate;

    #[test]
    fn rows_carry_index_and_status() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let entries = vec![
            EntryValidator::validate(&EntryInput::new("Ada", "walked", "yoga", 240), d).unwrap(),
            EntryValidator::validate(&EntryInput::new("Bo", "swam", "read", 30), d).unwrap(),
        ];

        let out = strip_ansi(&render_entries(&entries, '-'));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("# Name"));
        assert!(lines[2].starts_with("0 Ada"));
        assert!(lines[2].contains("240 (04h 00m)"));
        assert!(lines[2].contains("Healthy"));
        assert!(lines[3].starts_with("1 Bo"));
        assert!(lines[3].contains("Needs More Me-Time"));
        assert!(lines[3].trim_end().ends_with("2025-01-20"));
    }
}
