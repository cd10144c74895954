// src/export/model.rs

use crate::models::entry::Entry;
use serde::Serialize;

/// Riga "piatta" di export: stesse colonne, stesso ordine, in tutti i formati.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryExport {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Wellness Activity")]
    pub wellness_activity: String,
    #[serde(rename = "Me-time Activity")]
    pub me_time_activity: String,
    #[serde(rename = "Screen-free Time")]
    pub screen_free_minutes: i64,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Date")]
    pub date: String,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            name: e.name().to_string(),
            wellness_activity: e.wellness_activity().to_string(),
            me_time_activity: e.me_time_activity().to_string(),
            screen_free_minutes: e.screen_free_minutes(),
            status: e.status().label().to_string(),
            date: e.date_str(),
        }
    }
}

/// Header row shared by XLSX / CSV / JSON.
pub fn get_headers() -> [&'static str; 6] {
    [
        "Name",
        "Wellness Activity",
        "Me-time Activity",
        "Screen-free Time",
        "Status",
        "Date",
    ]
}

/// Index of the only numeric column.
pub(crate) const MINUTES_COL: usize = 3;

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.name.clone(),
        e.wellness_activity.clone(),
        e.me_time_activity.clone(),
        e.screen_free_minutes.to_string(),
        e.status.clone(),
        e.date.clone(),
    ]
}

pub fn entries_to_export(entries: &[Entry]) -> Vec<EntryExport> {
    entries.iter().map(EntryExport::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validator::EntryValidator;
    use crate::models::entry::EntryInput;
    use chrono::NaiveDate;

    #[test]
    fn row_follows_header_order() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let e = EntryValidator::validate(&EntryInput::new("Mia", "ran", "painting", 239), d)
            .unwrap();
        let row = entry_to_row(&EntryExport::from(&e));
        assert_eq!(
            row,
            vec!["Mia", "ran", "painting", "239", "Needs More Me-Time", "2025-06-01"]
        );
        assert_eq!(get_headers()[MINUTES_COL], "Screen-free Time");
    }

    #[test]
    fn json_keys_are_column_names() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let e = EntryValidator::validate(&EntryInput::new("Mia", "ran", "painting", 240), d)
            .unwrap();
        let v = serde_json::to_value(EntryExport::from(&e)).unwrap();
        assert_eq!(v["Screen-free Time"], 240);
        assert_eq!(v["Status"], "Healthy");
        assert_eq!(v["Date"], "2025-06-01");
    }
}
