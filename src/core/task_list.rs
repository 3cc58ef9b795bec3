use chrono::NaiveDateTime;

use super::gate::validate_new_task;
use super::task::Task;
use crate::error::ValidationError;

/// Ordered tasks. Position is identity and the order is saved as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Task> {
        self.tasks.iter_mut()
    }

    /// Validate and append an unchecked task. The list is untouched on error.
    pub fn add(
        &mut self,
        text: &str,
        reminder: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> Result<(), ValidationError> {
        validate_new_task(text, reminder, now)?;
        let mut task = Task::new(text.trim());
        if let Some(at) = reminder {
            task = task.with_reminder(at);
        }
        self.tasks.push(task);
        Ok(())
    }

    pub fn toggle(&mut self, index: usize) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.toggle();
                true
            }
            None => false,
        }
    }

    /// Drop every checked task, returning how many went.
    pub fn delete_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    /// Swap the task at `index` with its neighbour `offset` places away.
    pub fn move_task(&mut self, index: usize, offset: isize) -> bool {
        let len = self.tasks.len();
        match index.checked_add_signed(offset).filter(|&pos| pos < len) {
            Some(pos) if index < len => {
                self.tasks.swap(index, pos);
                true
            }
            _ => false,
        }
    }

    pub fn clear_reminder(&mut self, index: usize) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) if task.reminder.is_some() => {
                task.reminder = None;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn pending_reminders(&self) -> usize {
        self.tasks.iter().filter(|t| t.reminder.is_some()).count()
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}
