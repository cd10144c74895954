use chrono::NaiveDate;

/// Local calendar date, used to stamp new entries.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
