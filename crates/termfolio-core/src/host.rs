//! Outbound callbacks from the interpreter to whatever hosts it.
//!
//! A page, a TUI, or the readline binary implements [`TerminalHost`]; command
//! handlers invoke at most one of these per dispatch.

use serde::{Deserialize, Serialize};

use crate::dialogue::ContactSubmission;
use crate::error::Result;

/// Severity of a host notification (toast).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationSeverity {
    Info,
    Success,
    Warning,
    Error,
}

/// Side effects the terminal cannot perform on its own.
pub trait TerminalHost: Send + Sync {
    /// Scrolls or routes the surrounding page to a section.
    fn navigate_to_section(&self, section_id: &str);

    fn toggle_theme(&self);

    /// Offers the file at `path` for download under `suggested_name`.
    fn trigger_file_download(&self, path: &str, suggested_name: &str);

    /// Opens a decorative sub-application (game, chatbot).
    fn open_submodule(&self, name: &str);

    fn emit_notification(&self, text: &str, severity: NotificationSeverity);

    /// Delivers a confirmed contact form. Called exactly once per affirmative
    /// confirmation; never on decline or cancel.
    fn submit_contact(&self, submission: &ContactSubmission) -> Result<()>;
}

/// Host that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl TerminalHost for NoopHost {
    fn navigate_to_section(&self, _section_id: &str) {}

    fn toggle_theme(&self) {}

    fn trigger_file_download(&self, _path: &str, _suggested_name: &str) {}

    fn open_submodule(&self, _name: &str) {}

    fn emit_notification(&self, _text: &str, _severity: NotificationSeverity) {}

    fn submit_contact(&self, _submission: &ContactSubmission) -> Result<()> {
        Ok(())
    }
}
