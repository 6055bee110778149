//! Platform paths for termfolio files.
//!
//! ```text
//! ~/.config/termfolio/          # Config directory
//! ├── config.toml               # Terminal settings, profile, tour
//! ├── state.toml                # Durable tutorial flags
//! └── logs/                     # Rolling log files
//!     └── termfolio.log.YYYY-MM-DD
//!
//! ~/.local/share/termfolio/     # Data directory
//! └── outbox.jsonl              # Contact messages, one JSON object per line
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "termfolio";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
    /// The platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves every file termfolio reads or writes.
pub struct TermfolioPaths;

impl TermfolioPaths {
    /// `<config_dir>/termfolio`, e.g. `~/.config/termfolio/`.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// `<data_dir>/termfolio`, e.g. `~/.local/share/termfolio/`.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DataDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn state_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("state.toml"))
    }

    pub fn log_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }

    pub fn outbox_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("outbox.jsonl"))
    }
}
