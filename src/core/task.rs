use chrono::{DateTime, Local, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};

/// On-disk reminder format: ISO-8601 local time, second precision.
pub const REMINDER_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    #[serde(rename = "task")]
    pub text: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_reminder")]
    pub reminder: Option<NaiveDateTime>,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            reminder: None,
        }
    }

    pub fn with_reminder(mut self, at: NaiveDateTime) -> Self {
        self.reminder = Some(truncate_to_second(at));
        self
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// True when a reminder is set and `now` has reached it.
    pub fn reminder_due(&self, now: NaiveDateTime) -> bool {
        self.reminder.is_some_and(|at| at <= now)
    }
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(REMINDER_FORMAT).to_string()
}

/// Parse a stored reminder. Accepts the native format (optionally with
/// fractional seconds) and RFC 3339 with an offset, which is shifted to
/// local time. Sub-second precision is dropped.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, REMINDER_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
        .map(truncate_to_second)
}

fn truncate_to_second(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_nanosecond(0).unwrap_or(ts)
}

fn serialize_reminder<S: Serializer>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(ts) => serializer.serialize_str(&format_timestamp(ts)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn serializes_without_reminder() {
        let json = serde_json::to_string(&Task::new("Buy milk")).unwrap();
        assert_eq!(json, r#"{"task":"Buy milk","completed":false}"#);
    }

    #[test]
    fn serializes_reminder_as_iso() {
        let task = Task::new("Call mom").with_reminder(at(9, 30, 0));
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"task":"Call mom","completed":false,"reminder":"2026-03-14T09:30:00"}"#);
    }

    #[test]
    fn reminder_drops_subseconds() {
        let precise = at(9, 30, 5).with_nanosecond(250_000_000).unwrap();
        let task = Task::new("x").with_reminder(precise);
        assert_eq!(task.reminder, Some(at(9, 30, 5)));
    }

    #[test]
    fn parse_accepts_fractional_seconds() {
        assert_eq!(parse_timestamp("2026-03-14T09:30:05.123"), Some(at(9, 30, 5)));
        assert_eq!(parse_timestamp(" 2026-03-14T09:30:05 "), Some(at(9, 30, 5)));
    }

    #[test]
    fn parse_accepts_rfc3339() {
        let parsed = parse_timestamp("2026-03-14T09:30:05Z").unwrap();
        let expected = DateTime::parse_from_rfc3339("2026-03-14T09:30:05Z")
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_timestamp("tomorrow"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn reminder_due_at_boundary() {
        let task = Task::new("x").with_reminder(at(10, 0, 0));
        assert!(!task.reminder_due(at(9, 59, 59)));
        assert!(task.reminder_due(at(10, 0, 0)));
        assert!(!Task::new("y").reminder_due(at(23, 0, 0)));
    }
}
