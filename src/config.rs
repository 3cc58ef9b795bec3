use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_VERSION: u64 = 1;

pub const TASKS_FILE_NAME: &str = "tasks.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    pub const ALL: &'static [ThemeChoice] = &[ThemeChoice::Light, ThemeChoice::Dark];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Light => 0,
            Self::Dark => 1,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        Self::ALL.get(idx).copied().unwrap_or_default()
    }

    pub fn theme(&self) -> cosmic::Theme {
        match self {
            Self::Light => cosmic::theme::system_light(),
            Self::Dark => cosmic::theme::system_dark(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct TicklistConfig {
    pub theme: ThemeChoice,
    pub debug_logging: bool,
}

/// `tasks.json` next to the running executable, or under the user data dir
/// when the executable's location can't be resolved.
pub fn default_tasks_path() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TASKS_FILE_NAME)));

    match beside_exe {
        Some(path) => path,
        None => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("ticklist")
            .join(TASKS_FILE_NAME),
    }
}
