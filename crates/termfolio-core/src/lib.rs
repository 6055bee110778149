//! Core of the termfolio command shell.
//!
//! A closed, fixed-vocabulary terminal for a personal portfolio: a command
//! registry and dispatcher, prefix and typo suggestions, a guided tour, and a
//! contact form conducted through typed exchanges. This crate performs no I/O;
//! side effects go through [`TerminalHost`] and durable flags through
//! [`FlagStore`].
//!
//! ```
//! use std::sync::Arc;
//! use termfolio_core::{InMemoryFlagStore, NoopHost, TerminalBuilder};
//!
//! let mut terminal = TerminalBuilder::new(Arc::new(NoopHost), Arc::new(InMemoryFlagStore::new()))
//!     .build()
//!     .unwrap();
//! terminal.submit("whoami").unwrap();
//! assert!(!terminal.transcript().is_empty());
//! ```

pub mod command;
pub mod config;
pub mod dialogue;
pub mod error;
pub mod flags;
pub mod history;
pub mod host;
pub mod profile;
pub mod suggestion;
pub mod terminal;
pub mod transcript;
pub mod tutorial;

pub use command::{CommandCategory, CommandRegistry, CommandSpec};
pub use config::{AppConfig, TerminalSettings};
pub use dialogue::{ContactSubmission, DialogueOutcome, DialogueStep};
pub use error::{Result, TerminalError};
pub use flags::{FlagStore, InMemoryFlagStore, TUTORIAL_COMPLETED_KEY, TUTORIAL_SKIPPED_KEY};
pub use host::{NoopHost, NotificationSeverity, TerminalHost};
pub use profile::Profile;
pub use suggestion::SuggestionEngine;
pub use terminal::{InputRoute, PendingSubmission, Terminal, TerminalBuilder};
pub use transcript::{LineKind, Transcript, TranscriptLine};
pub use tutorial::{TutorialGuide, TutorialPhase, TutorialStep};
