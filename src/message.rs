use ticklist::config::ThemeChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Banner shown above the list until dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub level: StatusLevel,
    pub text: String,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Info, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Error, text: text.into() }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // New task form
    TaskInputChanged(String),
    AddTask,
    ReminderToggled(bool),
    ReminderInputChanged(String),

    // List
    ToggleTask(usize),
    MoveTask(usize, isize),
    ClearReminder(usize),
    DeleteCompleted,

    // File
    SaveTasks,
    LoadTasks,

    // Settings
    OpenSettings,
    CloseSettings,
    SetTheme(ThemeChoice),
    ToggleDebugLogging,

    DismissStatus,

    /// Periodic reminder scan and greeting refresh.
    Tick,
}
