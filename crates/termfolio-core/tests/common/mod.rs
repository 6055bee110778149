#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use termfolio_core::{
    ContactSubmission, InMemoryFlagStore, LineKind, NotificationSeverity, Terminal,
    TerminalBuilder, TerminalError, TerminalHost,
};

/// A host callback as seen by the test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Navigate(String),
    ToggleTheme,
    Download { path: String, suggested_name: String },
    OpenSubmodule(String),
    Notify(String, NotificationSeverity),
    SubmitContact(ContactSubmission),
}

/// Mock host that records every callback in order.
#[derive(Default)]
pub struct RecordingHost {
    calls: Mutex<Vec<HostCall>>,
    fail_submit: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose `submit_contact` always fails.
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_submit: true,
        }
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::SubmitContact(submission) => Some(submission),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl TerminalHost for RecordingHost {
    fn navigate_to_section(&self, section_id: &str) {
        self.record(HostCall::Navigate(section_id.to_string()));
    }

    fn toggle_theme(&self) {
        self.record(HostCall::ToggleTheme);
    }

    fn trigger_file_download(&self, path: &str, suggested_name: &str) {
        self.record(HostCall::Download {
            path: path.to_string(),
            suggested_name: suggested_name.to_string(),
        });
    }

    fn open_submodule(&self, name: &str) {
        self.record(HostCall::OpenSubmodule(name.to_string()));
    }

    fn emit_notification(&self, text: &str, severity: NotificationSeverity) {
        self.record(HostCall::Notify(text.to_string(), severity));
    }

    fn submit_contact(&self, submission: &ContactSubmission) -> termfolio_core::Result<()> {
        self.record(HostCall::SubmitContact(submission.clone()));
        if self.fail_submit {
            return Err(TerminalError::io("outbox unavailable"));
        }
        Ok(())
    }
}

pub struct Harness {
    pub terminal: Terminal,
    pub host: Arc<RecordingHost>,
    pub flags: Arc<InMemoryFlagStore>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(RecordingHost::new(), InMemoryFlagStore::new())
    }

    pub fn with(host: RecordingHost, flags: InMemoryFlagStore) -> Self {
        let host = Arc::new(host);
        let flags = Arc::new(flags);
        let terminal = TerminalBuilder::new(host.clone(), flags.clone())
            .build()
            .expect("default terminal should build");
        Self {
            terminal,
            host,
            flags,
        }
    }

    pub fn submit(&mut self, raw: &str) {
        self.terminal.submit(raw).expect("terminal should be idle");
    }

    pub fn texts(&self) -> Vec<String> {
        self.terminal
            .transcript()
            .lines()
            .iter()
            .map(|line| line.text.clone())
            .collect()
    }

    pub fn count_kind(&self, kind: LineKind) -> usize {
        self.terminal
            .transcript()
            .lines()
            .iter()
            .filter(|line| line.kind == kind)
            .count()
    }

    pub fn has_not_found(&self) -> bool {
        self.terminal
            .transcript()
            .lines()
            .iter()
            .any(|line| line.kind == LineKind::Error && line.text.starts_with("command not found"))
    }
}
