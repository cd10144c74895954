//! Entry validation and status derivation.
//!
//! Rules are checked in a fixed order (empty fields, letters, screen time)
//! and every violated rule is collected, so callers can show either all of
//! them or only the first one.

use crate::models::entry::{Entry, EntryInput};
use crate::models::status::Status;
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

pub const MIN_SCREEN_FREE_MINUTES: i64 = 1;
pub const MAX_SCREEN_FREE_MINUTES: i64 = 1440;

/// Text fields of the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    WellnessActivity,
    MeTimeActivity,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::WellnessActivity => "Wellness Activity",
            Field::MeTimeActivity => "Me-time Activity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("All fields must be filled.")]
    EmptyField,

    #[error("{0} must contain letters.")]
    MissingLetters(Field),

    #[error("Screen-free Time must be between 1 and 1440 minutes (got {0}).")]
    OutOfRangeScreenTime(i64),

    #[error("Screen-free Time must be a whole number of minutes (got '{0}').")]
    InvalidScreenTime(String),
}

/// Every rule violated by one submission, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// The error a single-message form would display.
    pub fn first(&self) -> Option<&FieldError> {
        self.0.first()
    }

    pub fn contains(&self, err: &FieldError) -> bool {
        self.0.contains(err)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        f.write_str(&msgs.join(" "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<FieldError> for ValidationErrors {
    fn from(e: FieldError) -> Self {
        ValidationErrors(vec![e])
    }
}

pub struct EntryValidator;

impl EntryValidator {
    /// Validate form values and build the entry dated `date`.
    ///
    /// Text fields are trimmed before they are checked and stored.
    pub fn validate(input: &EntryInput, date: NaiveDate) -> Result<Entry, ValidationErrors> {
        Self::build(
            [
                input.name.as_str(),
                input.wellness_activity.as_str(),
                input.me_time_activity.as_str(),
            ],
            Ok(input.screen_free_minutes),
            date,
        )
    }

    /// Same as [`validate`](Self::validate), with the minutes still as typed.
    ///
    /// A non-numeric value is reported next to any text field errors.
    pub fn validate_raw(
        name: &str,
        wellness_activity: &str,
        me_time_activity: &str,
        raw_minutes: &str,
        date: NaiveDate,
    ) -> Result<Entry, ValidationErrors> {
        Self::build(
            [name, wellness_activity, me_time_activity],
            Self::parse_minutes(raw_minutes),
            date,
        )
    }

    fn build(
        texts: [&str; 3],
        minutes: Result<i64, FieldError>,
        date: NaiveDate,
    ) -> Result<Entry, ValidationErrors> {
        let fields = [
            (Field::Name, texts[0].trim()),
            (Field::WellnessActivity, texts[1].trim()),
            (Field::MeTimeActivity, texts[2].trim()),
        ];

        let mut errors = Vec::new();

        if fields.iter().any(|(_, v)| v.is_empty()) {
            errors.push(FieldError::EmptyField);
        }

        // empty fields are already covered by EmptyField
        for (field, value) in fields.iter() {
            if !value.is_empty() && !has_letter(value) {
                errors.push(FieldError::MissingLetters(*field));
            }
        }

        let minutes = minutes.and_then(check_minutes);
        if let Err(e) = &minutes {
            errors.push(e.clone());
        }

        match minutes {
            Ok(m) if errors.is_empty() => {
                let [(_, name), (_, activity), (_, metime)] = fields;
                Ok(Entry::new(
                    name.to_string(),
                    activity.to_string(),
                    metime.to_string(),
                    m,
                    date,
                ))
            }
            _ => Err(ValidationErrors(errors)),
        }
    }

    /// Parse the raw screen-free input (no range check).
    pub fn parse_minutes(raw: &str) -> Result<i64, FieldError> {
        raw.trim()
            .parse::<i64>()
            .map_err(|_| FieldError::InvalidScreenTime(raw.trim().to_string()))
    }

    pub fn derive_status(minutes: i64) -> Status {
        Status::from_minutes(minutes)
    }
}

/// Range check for screen-free minutes.
pub fn check_minutes(minutes: i64) -> Result<i64, FieldError> {
    if (MIN_SCREEN_FREE_MINUTES..=MAX_SCREEN_FREE_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(FieldError::OutOfRangeScreenTime(minutes))
    }
}

fn has_letter(s: &str) -> bool {
    s.chars().any(char::is_alphabetic)
}
