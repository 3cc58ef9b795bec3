use notify_rust::{Notification, Timeout, Urgency};

pub const REMINDER_TITLE: &str = "Task Reminder";

/// Where reminder notifications go.
pub trait Notifier {
    fn notify(&mut self, title: &str, body: &str);
}

/// Freedesktop notification via the session bus.
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self { app_name: app_name.into() }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&mut self, title: &str, body: &str) {
        let result = Notification::new()
            .summary(title)
            .body(body)
            .appname(&self.app_name)
            .icon("alarm-symbolic")
            .urgency(Urgency::Normal)
            .timeout(Timeout::Milliseconds(5000))
            .show();
        if let Err(e) = result {
            log::warn!("Failed to show notification '{}': {}", title, e);
        }
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub sent: Vec<(String, String)>,
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&mut self, title: &str, body: &str) {
        self.sent.push((title.to_string(), body.to_string()));
    }
}
