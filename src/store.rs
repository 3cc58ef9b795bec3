use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::core::task::{Task, parse_timestamp};
use crate::core::task_list::TaskList;
use crate::error::StoreError;

/// Read one array element on its own. Non-objects and records without text
/// are skipped, a non-bool `completed` reads as false, and a reminder that
/// isn't a parseable string is dropped.
fn record_to_task(index: usize, value: &Value) -> Option<Task> {
    let Some(record) = value.as_object() else {
        log::warn!("Skipping task record {}: not an object", index);
        return None;
    };

    let text = record.get("task").and_then(Value::as_str).unwrap_or_default();
    if text.trim().is_empty() {
        log::warn!("Skipping task record {}: missing or empty text", index);
        return None;
    }

    let completed = match record.get("completed") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(done)) => *done,
        Some(other) => {
            log::warn!("Task '{}' has non-bool completed {}, treating as unchecked", text, other);
            false
        }
    };

    let reminder = match record.get("reminder") {
        None | Some(Value::Null) => None,
        Some(raw) => {
            let parsed = raw.as_str().and_then(parse_timestamp);
            if parsed.is_none() {
                log::warn!("Dropping unparseable reminder {} on '{}'", raw, text);
            }
            parsed
        }
    };

    Some(Task {
        text: text.to_string(),
        completed,
        reminder,
    })
}

/// JSON array file holding the task list.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<TaskList, StoreError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                StoreError::Missing(self.path.clone())
            } else {
                StoreError::Io { path: self.path.clone(), source }
            }
        })?;

        let records: Vec<Value> = serde_json::from_str(&content)
            .map_err(|source| StoreError::Parse { path: self.path.clone(), source })?;

        let tasks: Vec<Task> = records
            .iter()
            .enumerate()
            .filter_map(|(index, value)| record_to_task(index, value))
            .collect();
        log::debug!("Loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(TaskList::from(tasks))
    }

    /// Overwrite the file. Written to a sibling first so a failed write
    /// leaves the previous contents intact.
    pub fn save(&self, tasks: &TaskList) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(tasks.tasks())?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| self.io_error(source))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        if let Err(source) = std::fs::write(&tmp, json) {
            let _ = std::fs::remove_file(&tmp);
            return Err(self.io_error(source));
        }
        if let Err(source) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(self.io_error(source));
        }

        log::debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io { path: self.path.clone(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn store_in(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::new(dir.path().join("tasks.json"))
    }

    #[test]
    fn roundtrip_preserves_order_flags_and_reminders() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let reminder = NaiveDate::from_ymd_opt(2026, 11, 2).unwrap().and_hms_opt(7, 45, 12).unwrap();

        let mut done = Task::new("Pay rent");
        done.completed = true;
        let list = TaskList::from(vec![
            Task::new("Buy milk"),
            done,
            Task::new("Book flights").with_reminder(reminder),
        ]);

        store.save(&list).unwrap();
        assert_eq!(store.load().unwrap(), list);
    }

    #[test]
    fn buy_milk_example() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), r#"[{"task":"Buy milk","completed":false}]"#).unwrap();

        let list = store.load().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks()[0].text, "Buy milk");
        assert!(!list.tasks()[0].completed);
        assert_eq!(list.tasks()[0].reminder, None);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(matches!(store.load(), Err(StoreError::Missing(_))));
    }

    #[test]
    fn non_array_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), r#"{"task":"not a list"}"#).unwrap();
        assert!(matches!(store.load(), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn directory_in_place_of_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir(store.path()).unwrap();
        assert!(matches!(store.load(), Err(StoreError::Io { .. })));
    }

    #[test]
    fn badly_typed_records_do_not_sink_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            r#"[
                {"task":"Keep"},
                {"task":"Odd flag","completed":"yes"},
                {"task":"Numeric reminder","reminder":17},
                null,
                "just a string",
                {"task":5,"completed":true},
                {"task":"Last","completed":true}
            ]"#,
        )
        .unwrap();

        let list = store.load().unwrap();
        let texts: Vec<&str> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Keep", "Odd flag", "Numeric reminder", "Last"]);
        assert!(!list.tasks()[1].completed);
        assert_eq!(list.tasks()[2].reminder, None);
        assert!(list.tasks()[3].completed);
    }

    #[test]
    fn lenient_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            r#"[
                {"task":"Keep","extra":42},
                {"task":"","completed":true},
                {"completed":true},
                {"task":"Bad reminder","completed":true,"reminder":"whenever"}
            ]"#,
        )
        .unwrap();

        let list = store.load().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.tasks()[0], Task::new("Keep"));
        assert_eq!(list.tasks()[1].text, "Bad reminder");
        assert!(list.tasks()[1].completed);
        assert_eq!(list.tasks()[1].reminder, None);
    }

    #[test]
    fn save_writes_reminder_only_when_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let reminder = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap();
        let list = TaskList::from(vec![Task::new("a"), Task::new("b").with_reminder(reminder)]);
        store.save(&list).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert!(value[0].get("reminder").is_none());
        assert_eq!(value[1]["reminder"], "2026-01-02T03:04:05");
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn save_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("nested").join("tasks.json"));
        store.save(&TaskList::from(vec![Task::new("x")])).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn failed_save_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "[]").unwrap();
        // A directory where the temp file should go makes the write fail.
        std::fs::create_dir(store.path().with_extension("json.tmp")).unwrap();

        let result = store.save(&TaskList::from(vec![Task::new("x")]));
        assert!(matches!(result, Err(StoreError::Io { .. })));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[]");
    }
}
