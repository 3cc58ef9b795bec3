use chrono::NaiveDateTime;

use crate::error::ValidationError;

/// Format of the reminder field in the new-task form.
pub const FORM_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Check a candidate task before it enters the list.
pub fn validate_new_task(
    text: &str,
    reminder: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    if let Some(at) = reminder {
        if at <= now {
            return Err(ValidationError::ReminderNotInFuture);
        }
    }
    Ok(())
}

pub fn parse_form_reminder(input: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), FORM_FORMAT).ok()
}

/// Reminder half of the new-task form. The text input stays locked while a
/// reminder is switched on but doesn't name a future time.
#[derive(Debug, Clone, Default)]
pub struct ReminderGate {
    pub enabled: bool,
    pub input: String,
}

impl ReminderGate {
    /// The reminder to attach, if enabled and parseable.
    pub fn reminder(&self) -> Option<NaiveDateTime> {
        if self.enabled { parse_form_reminder(&self.input) } else { None }
    }

    pub fn input_enabled(&self, now: NaiveDateTime) -> bool {
        !self.enabled || self.reminder().is_some_and(|at| at > now)
    }

    /// Turn the reminder on, seeding the field with `suggested` when empty.
    pub fn enable(&mut self, suggested: NaiveDateTime) {
        self.enabled = true;
        if self.input.trim().is_empty() {
            self.input = suggested.format(FORM_FORMAT).to_string();
        }
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
