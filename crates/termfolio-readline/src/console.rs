//! Console side of the terminal: host callbacks and transcript rendering.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use colored::{ColoredString, Colorize};
use termfolio_core::{
    ContactSubmission, LineKind, NotificationSeverity, Terminal, TerminalHost, TranscriptLine,
};
use termfolio_infrastructure::JsonlContactOutbox;
use tracing::{info, warn};

/// [`TerminalHost`] for a real terminal.
///
/// Callbacks are queued as notes and printed after the transcript lines of the
/// same dispatch, so the console order matches the handler's output.
pub struct ConsoleHost {
    outbox: JsonlContactOutbox,
    dark: AtomicBool,
    notes: Mutex<Vec<ColoredString>>,
}

impl ConsoleHost {
    pub fn new(outbox: JsonlContactOutbox) -> Self {
        Self {
            outbox,
            dark: AtomicBool::new(true),
            notes: Mutex::new(Vec::new()),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::Relaxed)
    }

    pub fn drain_notes(&self) -> Vec<ColoredString> {
        std::mem::take(&mut *self.notes.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn note(&self, text: ColoredString) {
        self.notes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text);
    }
}

impl TerminalHost for ConsoleHost {
    fn navigate_to_section(&self, section_id: &str) {
        self.note(format!("[page] scrolled to #{}", section_id).bright_black());
    }

    fn toggle_theme(&self) {
        let was_dark = self.dark.fetch_xor(true, Ordering::Relaxed);
        let theme = if was_dark { "light" } else { "dark" };
        info!("[Console] Theme switched to {}", theme);
        self.note(format!("[page] {} theme", theme).bright_black());
    }

    fn trigger_file_download(&self, path: &str, suggested_name: &str) {
        self.note(format!("[download] {} -> {}", path, suggested_name).bright_black());
    }

    fn open_submodule(&self, name: &str) {
        self.note(format!("[{}] opens in the browser version of this page", name).bright_black());
    }

    fn emit_notification(&self, text: &str, severity: NotificationSeverity) {
        let text = match severity {
            NotificationSeverity::Info => text.bright_blue(),
            NotificationSeverity::Success => text.bright_green(),
            NotificationSeverity::Warning => text.yellow(),
            NotificationSeverity::Error => text.red(),
        };
        self.note(text);
    }

    fn submit_contact(&self, submission: &ContactSubmission) -> termfolio_core::Result<()> {
        match self.outbox.append(submission) {
            Ok(entry) => {
                self.emit_notification(
                    &format!("Saved to {} (id {})", self.outbox.path().display(), entry.id),
                    NotificationSeverity::Success,
                );
                Ok(())
            }
            Err(e) => {
                warn!("[Console] Outbox write failed: {}", e);
                Err(e)
            }
        }
    }
}

/// Prints transcript lines that have not been shown yet.
#[derive(Debug, Default)]
pub struct Renderer {
    epoch: u64,
    next_id: u64,
}

impl Renderer {
    /// `echo_input` prints input lines too; typed lines are already on screen.
    pub fn flush(&mut self, terminal: &Terminal, host: &ConsoleHost, echo_input: bool) {
        let transcript = terminal.transcript();
        if transcript.epoch() != self.epoch {
            print!("\x1B[2J\x1B[1;1H");
            self.epoch = transcript.epoch();
        }

        let dark = host.is_dark();
        for line in transcript.lines_from(self.next_id) {
            if line.kind == LineKind::Input && !echo_input {
                continue;
            }
            println!("{}", render_line(line, dark));
        }
        self.next_id = transcript.next_id();

        for note in host.drain_notes() {
            println!("{}", note);
        }
    }
}

fn render_line(line: &TranscriptLine, dark: bool) -> String {
    let text = line.text.as_str();
    let styled = match (line.kind, dark) {
        (LineKind::Input, _) => format!("> {}", text).green(),
        (LineKind::Output, true) => text.white(),
        (LineKind::Output, false) => text.black(),
        (LineKind::Error, _) => text.red(),
        (LineKind::Success, _) => text.green(),
        (LineKind::Info, true) => text.bright_black(),
        (LineKind::Info, false) => text.blue(),
        (LineKind::Ascii, true) => text.bright_magenta(),
        (LineKind::Ascii, false) => text.magenta(),
        (LineKind::Tutorial, true) => text.bright_yellow(),
        (LineKind::Tutorial, false) => text.yellow(),
    };
    if line.clickable {
        format!("{} {}", styled, format!("[#{}]", line.id).dimmed())
    } else {
        styled.to_string()
    }
}
