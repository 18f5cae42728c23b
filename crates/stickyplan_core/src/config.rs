//! Planner configuration.
//!
//! # Responsibility
//! - Load the optional user config file (`<config_dir>/stickyplan/config.toml`).
//! - Fill every missing setting with a built-in default.
//!
//! # Invariants
//! - A missing config file is not an error; defaults apply.
//! - Unknown keys are rejected so typos surface early.

use crate::calendar::{ViewMode, WeekStart};
use crate::logging::default_log_level;
use crate::repo::task_storage::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "stickyplan";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "stickyplan.sqlite3";

/// Configuration load failures.
#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Effective planner settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Key of the task-list slot in the key-value store.
    pub storage_key: String,
    /// SQLite database file.
    pub db_path: PathBuf,
    /// `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
    pub week_start: WeekStart,
    pub default_view: ViewMode,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            db_path: data_dir.join(DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: data_dir.join("logs"),
            week_start: WeekStart::default(),
            default_view: ViewMode::default(),
        }
    }
}

impl PlannerConfig {
    /// Loads the user config file when it exists, otherwise defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match user_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads settings from `path`; keys absent from the file keep defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Location of the optional user config file.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}
