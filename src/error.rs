use std::path::PathBuf;

use thiserror::Error;

/// Failures reading or writing the task file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no saved tasks at {}", .0.display())]
    Missing(PathBuf),

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid task file: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Rejections from the new-task gate. The list is never modified when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task cannot be empty")]
    EmptyText,

    #[error("reminder time must be in the future")]
    ReminderNotInFuture,
}
