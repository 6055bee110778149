//! [`FlagStore`] backed by a small TOML file.
//!
//! ```toml
//! [flags]
//! tutorial_completed = true
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use termfolio_core::{FlagStore, Result, TerminalError};
use tracing::{debug, info};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(default)]
    flags: BTreeMap<String, bool>,
}

/// Durable flags persisted to `state.toml`.
///
/// The file is read once on open and cached; every `set` rewrites it.
#[derive(Debug)]
pub struct TomlFlagStore {
    path: PathBuf,
    cache: RwLock<BTreeMap<String, bool>>,
}

impl TomlFlagStore {
    /// Opens the store at `path`. A missing or empty file starts with no flags.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let flags = Self::read_file(&path)?;
        debug!("[FlagStore] Opened {} ({} flags)", path.display(), flags.len());
        Ok(Self {
            path,
            cache: RwLock::new(flags),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Clears every flag and rewrites the file.
    pub fn reset(&self) -> Result<()> {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        cache.clear();
        self.write_file(&cache)?;
        info!("[FlagStore] Reset {}", self.path.display());
        Ok(())
    }

    fn read_file(path: &Path) -> Result<BTreeMap<String, bool>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            TerminalError::io(format!("Failed to read state file at {}: {}", path.display(), e))
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let state: StateFile = toml::from_str(&content)?;
        Ok(state.flags)
    }

    fn write_file(&self, flags: &BTreeMap<String, bool>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TerminalError::io(format!(
                    "Failed to create state directory at {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let state = StateFile {
            flags: flags.clone(),
        };
        let content = toml::to_string_pretty(&state)?;
        fs::write(&self.path, content).map_err(|e| {
            TerminalError::io(format!(
                "Failed to write state file at {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl FlagStore for TomlFlagStore {
    fn get(&self, key: &str) -> bool {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied()
            .unwrap_or(false)
    }

    fn set(&self, key: &str, value: bool) -> Result<()> {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        cache.insert(key.to_string(), value);
        self.write_file(&cache)?;
        info!("[FlagStore] {} = {}", key, value);
        Ok(())
    }
}
