//! Contact form conducted through typed exchanges.
//!
//! While a dialogue is active it owns input routing: every submitted line is
//! an answer for the current step and is never parsed as a command.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::TerminalError;
use crate::transcript::{LineKind, Transcript};

/// Answers accepted as "send it" at the confirm step.
const AFFIRMATIVE_ANSWERS: [&str; 2] = ["y", "yes"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogueStep {
    #[default]
    Name,
    Email,
    Message,
    Confirm,
}

impl DialogueStep {
    /// Short label a host can show in place of the normal prompt.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            DialogueStep::Name => "name",
            DialogueStep::Email => "email",
            DialogueStep::Message => "message",
            DialogueStep::Confirm => "send? (y/n)",
        }
    }
}

/// Answers collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogueState {
    pub active: bool,
    pub step: DialogueStep,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A confirmed contact form handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Result of feeding one line (or an interrupt) to the dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueOutcome {
    /// Still collecting answers
    Pending,
    /// Confirmed; the host must deliver this exactly once
    Submitted(ContactSubmission),
    /// Answered "no" at the confirm step
    Declined,
    /// Interrupted before completion
    Cancelled,
}

/// The contact micro-dialogue (`name -> email -> message -> confirm`).
#[derive(Debug, Default)]
pub struct DialogueSession {
    state: DialogueState,
}

impl DialogueSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DialogueState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn step(&self) -> DialogueStep {
        self.state.step
    }

    /// Enters the dialogue at the `name` step.
    pub fn start(&mut self, transcript: &mut Transcript) {
        self.state = DialogueState {
            active: true,
            step: DialogueStep::Name,
            ..DialogueState::default()
        };
        info!("[Dialogue] Contact form started");
        transcript.push(LineKind::Info, "Let's get in touch. Press Ctrl-C at any time to cancel.");
        transcript.push(LineKind::Output, "What's your name?");
    }

    /// Consumes `input` as the answer for the current step.
    pub fn handle(&mut self, input: &str, transcript: &mut Transcript) -> DialogueOutcome {
        if !self.state.active {
            return DialogueOutcome::Pending;
        }
        let answer = input.trim();

        match self.state.step {
            DialogueStep::Name => {
                if answer.is_empty() {
                    Self::reject(transcript, "name", "please tell me who you are");
                    transcript.push(LineKind::Output, "What's your name?");
                    return DialogueOutcome::Pending;
                }
                self.state.name = answer.to_string();
                self.state.step = DialogueStep::Email;
                transcript.push(
                    LineKind::Output,
                    format!("Nice to meet you, {}! What's your email?", self.state.name),
                );
                DialogueOutcome::Pending
            }
            DialogueStep::Email => {
                if !answer.contains('@') {
                    Self::reject(transcript, "email", "an address must contain '@'");
                    transcript.push(LineKind::Output, "What's your email?");
                    return DialogueOutcome::Pending;
                }
                self.state.email = answer.to_string();
                self.state.step = DialogueStep::Message;
                transcript.push(LineKind::Output, "What would you like to say?");
                DialogueOutcome::Pending
            }
            DialogueStep::Message => {
                if answer.is_empty() {
                    Self::reject(transcript, "message", "the message cannot be empty");
                    transcript.push(LineKind::Output, "What would you like to say?");
                    return DialogueOutcome::Pending;
                }
                self.state.message = answer.to_string();
                self.state.step = DialogueStep::Confirm;
                transcript.push(LineKind::Info, format!("  From:    {}", self.state.name));
                transcript.push(LineKind::Info, format!("  Email:   {}", self.state.email));
                transcript.push(LineKind::Info, format!("  Message: {}", self.state.message));
                transcript.push(LineKind::Output, "Send this message? (y/n)");
                DialogueOutcome::Pending
            }
            DialogueStep::Confirm => {
                let affirmative = AFFIRMATIVE_ANSWERS.contains(&answer.to_lowercase().as_str());
                let finished = std::mem::take(&mut self.state);
                if affirmative {
                    info!("[Dialogue] Contact form confirmed");
                    DialogueOutcome::Submitted(ContactSubmission {
                        name: finished.name,
                        email: finished.email,
                        message: finished.message,
                    })
                } else {
                    info!("[Dialogue] Contact form declined");
                    transcript.push(LineKind::Info, "Message discarded. Nothing was sent.");
                    DialogueOutcome::Declined
                }
            }        }
    }

    /// Aborts the dialogue from any step without submitting.
    pub fn cancel(&mut self, transcript: &mut Transcript) -> DialogueOutcome {
        if !self.state.active {
            return DialogueOutcome::Pending;
        }
        self.state = DialogueState::default();
        info!("[Dialogue] Contact form cancelled");
        transcript.push(LineKind::Info, "Contact form cancelled.");
        DialogueOutcome::Cancelled
    }

    fn reject(transcript: &mut Transcript, field: &str, message: &str) {
        let err = TerminalError::invalid_argument(field, message);
        transcript.push(LineKind::Error, err.to_string());
    }
}
