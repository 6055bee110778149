//! Loads `config.toml` from an explicit path or the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use termfolio_core::{AppConfig, Result, TerminalError};
use tracing::{debug, info};

use crate::paths::TermfolioPaths;

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config <path>`
    Explicit(PathBuf),
    /// `<config_dir>/termfolio/config.toml`
    UserFile(PathBuf),
    /// No file found; built-in portfolio
    BuiltIn,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
}

/// Resolves and loads the configuration.
///
/// An explicit path must exist. The user file is optional. A file that exists
/// but does not parse is always an error.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(TerminalError::config(format!(
                "config file {} does not exist",
                path.display()
            )));
        }
        let config = load_config_file(path)?;
        info!("[Config] Loaded {}", path.display());
        return Ok(LoadedConfig {
            config,
            source: ConfigSource::Explicit(path.to_path_buf()),
        });
    }

    match TermfolioPaths::config_file() {
        Ok(path) if path.exists() => {
            let config = load_config_file(&path)?;
            info!("[Config] Loaded {}", path.display());
            Ok(LoadedConfig {
                config,
                source: ConfigSource::UserFile(path),
            })
        }
        Ok(path) => {
            debug!("[Config] No config at {}, using built-in profile", path.display());
            Ok(LoadedConfig {
                config: AppConfig::default(),
                source: ConfigSource::BuiltIn,
            })
        }
        Err(e) => {
            debug!("[Config] {}, using built-in profile", e);
            Ok(LoadedConfig {
                config: AppConfig::default(),
                source: ConfigSource::BuiltIn,
            })
        }
    }
}

/// Reads one config file. A missing or empty file yields the defaults.
pub fn load_config_file(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path).map_err(|e| {
        TerminalError::io(format!("Failed to read config file at {}: {}", path.display(), e))
    })?;
    AppConfig::from_toml_str(&content).map_err(|e| {
        TerminalError::config(format!("Failed to parse {}: {}", path.display(), e))
    })
}
