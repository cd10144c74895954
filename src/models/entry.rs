use crate::models::status::Status;
use chrono::NaiveDate;

/// Raw field values as collected by the form, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryInput {
    pub name: String,
    pub wellness_activity: String,
    pub me_time_activity: String,
    pub screen_free_minutes: i64,
}

impl EntryInput {
    pub fn new(
        name: impl Into<String>,
        wellness_activity: impl Into<String>,
        me_time_activity: impl Into<String>,
        screen_free_minutes: i64,
    ) -> Self {
        Self {
            name: name.into(),
            wellness_activity: wellness_activity.into(),
            me_time_activity: me_time_activity.into(),
            screen_free_minutes,
        }
    }
}

/// One validated wellness log record.
///
/// Entries are only built by the validator and never change afterwards.
/// The status is not a field: it is always recomputed from the minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    wellness_activity: String,
    me_time_activity: String,
    screen_free_minutes: i64,
    date: NaiveDate,
}

impl Entry {
    pub(crate) fn new(
        name: String,
        wellness_activity: String,
        me_time_activity: String,
        screen_free_minutes: i64,
        date: NaiveDate,
    ) -> Self {
        Self {
            name,
            wellness_activity,
            me_time_activity,
            screen_free_minutes,
            date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wellness_activity(&self) -> &str {
        &self.wellness_activity
    }

    pub fn me_time_activity(&self) -> &str {
        &self.me_time_activity
    }

    pub fn screen_free_minutes(&self) -> i64 {
        self.screen_free_minutes
    }

    pub fn status(&self) -> Status {
        Status::from_minutes(self.screen_free_minutes)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Date as stored in tables and exports (YYYY-MM-DD).
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Short label used when picking rows to delete.
    pub fn short_label(&self) -> String {
        format!("{} ({})", self.name, self.date_str())
    }
}
