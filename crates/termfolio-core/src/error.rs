//! Error types for the Termfolio interpreter.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole interpreter.
///
/// Recoverable variants (`UnknownCommand`, `InvalidArgument`, `TutorialMismatch`)
/// never escape a dispatch; the terminal renders them as transcript lines.
/// `Config` is only produced while building a terminal or registry.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalError {
    /// No registry entry matches the command token
    #[error("command not found: {command}")]
    UnknownCommand { command: String },

    /// A typed answer or argument failed validation
    #[error("invalid {field}: {message}")]
    InvalidArgument { field: String, message: String },

    /// A gated tutorial step received a different command
    #[error("tutorial expects `{expected}`")]
    TutorialMismatch { expected: String },

    /// Malformed registry or tutorial table
    #[error("Configuration error: {0}")]
    Config(String),

    /// A submission is already in flight
    #[error("a command is still being processed")]
    Busy,

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },
}

impl TerminalError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an UnknownCommand error
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command: command.into(),
        }
    }

    /// Creates an InvalidArgument error
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a busy (submission in flight) error
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }

    /// Errors that are surfaced in the transcript and never end a session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownCommand { .. }
                | Self::InvalidArgument { .. }
                | Self::TutorialMismatch { .. }
                | Self::Busy
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TerminalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for TerminalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for TerminalError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for TerminalError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TerminalError>`.
pub type Result<T> = std::result::Result<T, TerminalError>;
