//! Append-only JSON-lines file of confirmed contact messages.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use termfolio_core::{ContactSubmission, Result, TerminalError};
use tracing::info;
use uuid::Uuid;

/// One line of `outbox.jsonl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboxEntry {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl OutboxEntry {
    pub fn new(submission: &ContactSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            name: submission.name.clone(),
            email: submission.email.clone(),
            message: submission.message.clone(),
        }
    }
}

#[derive(Debug)]
pub struct JsonlContactOutbox {
    path: PathBuf,
    /// Serializes appends from concurrent callers
    write_lock: Mutex<()>,
}

impl JsonlContactOutbox {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `submission` as one JSON object and returns the stored entry.
    pub fn append(&self, submission: &ContactSubmission) -> Result<OutboxEntry> {
        let entry = OutboxEntry::new(submission);
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                TerminalError::io(format!(
                    "Failed to open outbox at {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        file.write_all(line.as_bytes())?;

        info!("[Outbox] Stored message {} from {}", entry.id, entry.email);
        Ok(entry)
    }

    /// Every stored entry, oldest first. A missing file is an empty outbox.
    pub fn entries(&self) -> Result<Vec<OutboxEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = fs::File::open(&self.path)?;
        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            entries.push(serde_json::from_str(&line)?);
        }
        Ok(entries)
    }
}
