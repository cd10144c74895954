/// Minutes of screen-free time from which an entry counts as healthy.
pub const HEALTHY_THRESHOLD_MINUTES: i64 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Healthy,
    NeedsMoreMeTime,
}

impl Status {
    /// Derive the status from the screen-free minutes.
    pub fn from_minutes(minutes: i64) -> Self {
        if minutes >= HEALTHY_THRESHOLD_MINUTES {
            Status::Healthy
        } else {
            Status::NeedsMoreMeTime
        }
    }

    /// Label used in tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Healthy => "Healthy",
            Status::NeedsMoreMeTime => "Needs More Me-Time",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Status::Healthy => "🟢",
            Status::NeedsMoreMeTime => "🟠",
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, Status::Healthy)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary() {
        assert_eq!(Status::from_minutes(239), Status::NeedsMoreMeTime);
        assert_eq!(Status::from_minutes(240), Status::Healthy);
    }

    #[test]
    fn extremes() {
        assert_eq!(Status::from_minutes(1), Status::NeedsMoreMeTime);
        assert_eq!(Status::from_minutes(1440), Status::Healthy);
    }

    #[test]
    fn labels_match_export_values() {
        assert_eq!(Status::Healthy.to_string(), "Healthy");
        assert_eq!(Status::NeedsMoreMeTime.to_string(), "Needs More Me-Time");
    }
}
