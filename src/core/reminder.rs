use std::time::Duration;

use chrono::NaiveDateTime;

use super::task_list::TaskList;
use crate::notify::{Notifier, REMINDER_TITLE};

/// How often the window scans for due reminders.
pub const REMINDER_INTERVAL: Duration = Duration::from_secs(60);

pub fn reminder_body(text: &str) -> String {
    format!("Reminder: {}", text)
}

/// Fire every reminder at or before `now`, then clear it so it can't fire
/// again. Returns the number fired; the caller saves when it is non-zero.
pub fn check_reminders(tasks: &mut TaskList, now: NaiveDateTime, notifier: &mut dyn Notifier) -> usize {
    let mut fired = 0;
    for task in tasks.iter_mut() {
        if task.reminder_due(now) {
            log::info!("Reminder due for '{}'", task.text);
            notifier.notify(REMINDER_TITLE, &reminder_body(&task.text));
            task.reminder = None;
            fired += 1;
        }
    }
    fired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::Task;
    use crate::notify::RecordingNotifier;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 7, 4).unwrap().and_hms_opt(18, 0, 0).unwrap()
    }

    #[test]
    fn past_reminder_fires_once() {
        let mut list = TaskList::from(vec![
            Task::new("Take out trash").with_reminder(now() - chrono::Duration::minutes(3)),
        ]);
        let mut notifier = RecordingNotifier::default();

        assert_eq!(check_reminders(&mut list, now(), &mut notifier), 1);
        assert_eq!(list.tasks()[0].reminder, None);
        assert_eq!(
            notifier.sent,
            vec![(REMINDER_TITLE.to_string(), "Reminder: Take out trash".to_string())]
        );

        assert_eq!(check_reminders(&mut list, now(), &mut notifier), 0);
        assert_eq!(notifier.sent.len(), 1);
    }

    #[test]
    fn future_reminders_untouched() {
        let later = now() + chrono::Duration::minutes(1);
        let mut list = TaskList::from(vec![Task::new("Later").with_reminder(later), Task::new("None")]);
        let mut notifier = RecordingNotifier::default();

        assert_eq!(check_reminders(&mut list, now(), &mut notifier), 0);
        assert_eq!(list.tasks()[0].reminder, Some(later));
        assert!(notifier.sent.is_empty());
    }

    #[test]
    fn completed_tasks_still_fire() {
        let mut done = Task::new("Done already").with_reminder(now());
        done.completed = true;
        let mut list = TaskList::from(vec![done]);
        let mut notifier = RecordingNotifier::default();

        assert_eq!(check_reminders(&mut list, now(), &mut notifier), 1);
        assert!(list.tasks()[0].completed);
    }

    #[test]
    fn several_due_in_one_scan() {
        let earlier = now() - chrono::Duration::hours(1);
        let mut list = TaskList::from(vec![
            Task::new("a").with_reminder(earlier),
            Task::new("b").with_reminder(now() + chrono::Duration::hours(1)),
            Task::new("c").with_reminder(earlier),
        ]);
        let mut notifier = RecordingNotifier::default();

        assert_eq!(check_reminders(&mut list, now(), &mut notifier), 2);
        assert_eq!(list.pending_reminders(), 1);
        let bodies: Vec<&str> = notifier.sent.iter().map(|(_, b)| b.as_str()).collect();
        assert_eq!(bodies, ["Reminder: a", "Reminder: c"]);
    }
}
