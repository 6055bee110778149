//! What a command handler can see and do.

use tracing::warn;

use crate::command::registry::CommandRegistry;
use crate::history::HistoryNavigator;
use crate::host::NotificationSeverity;
use crate::profile::Profile;
use crate::suggestion::SuggestionEngine;
use crate::transcript::{LineKind, Transcript};
use crate::tutorial::TutorialPhase;

/// External side effect, carried out by the host after the handler returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigate { section: String },
    ToggleTheme,
    Download { path: String, suggested_name: String },
    OpenSubmodule { name: String },
    Notify { text: String, severity: NotificationSeverity },
}

/// Internal state transition the terminal applies after the handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    StartDialogue,
    StartTutorial,
    /// Dismiss the first-visit offer (`tutorial skip`)
    DeclineTutorial,
    ContinueTutorial,
    SkipTutorialStep,
    /// Skip straight to the end (`skip all`)
    SkipTutorial,
    ExitTutorial,
    ClearTranscript,
}

/// Handler view of the session.
///
/// Handlers only append lines and request effects; they never mutate the
/// tutorial, dialogue, or history directly.
pub struct CommandContext<'a> {
    transcript: &'a mut Transcript,
    pub profile: &'a Profile,
    pub registry: &'a CommandRegistry,
    pub suggestions: &'a SuggestionEngine,
    pub history: &'a HistoryNavigator,
    pub tutorial: TutorialPhase,
    effect: Option<Effect>,
    directive: Option<Directive>,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        transcript: &'a mut Transcript,
        profile: &'a Profile,
        registry: &'a CommandRegistry,
        suggestions: &'a SuggestionEngine,
        history: &'a HistoryNavigator,
        tutorial: TutorialPhase,
    ) -> Self {
        Self {
            transcript,
            profile,
            registry,
            suggestions,
            history,
            tutorial,
            effect: None,
            directive: None,
        }
    }

    pub fn line(&mut self, kind: LineKind, text: impl Into<String>) {
        self.transcript.push(kind, text);
    }

    pub fn output(&mut self, text: impl Into<String>) {
        self.line(LineKind::Output, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.line(LineKind::Error, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.line(LineKind::Success, text);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.line(LineKind::Info, text);
    }

    pub fn ascii(&mut self, text: impl Into<String>) {
        self.line(LineKind::Ascii, text);
    }

    /// Appends a line that replays `command` when activated.
    pub fn clickable(&mut self, kind: LineKind, text: impl Into<String>, command: impl Into<String>) {
        self.transcript.push_clickable(kind, text, command);
    }

    pub fn tutorial_active(&self) -> bool {
        matches!(self.tutorial, TutorialPhase::Step(_))
    }

    /// Requests an external effect. Only the first request per dispatch is kept.
    pub fn effect(&mut self, effect: Effect) {
        if let Some(existing) = &self.effect {
            warn!(
                "[Command] Dropping second effect {:?}; {:?} already requested",
                effect, existing
            );
            return;
        }
        self.effect = Some(effect);
    }

    /// Requests an internal transition. Only the first request per dispatch is kept.
    pub fn directive(&mut self, directive: Directive) {
        if self.directive.is_some() {
            warn!("[Command] Dropping second directive {:?}", directive);
            return;
        }
        self.directive = Some(directive);
    }

    pub fn into_parts(self) -> (Option<Effect>, Option<Directive>) {
        (self.effect, self.directive)
    }
}
