//! The command interpreter and the session it drives.
//!
//! [`Terminal`] owns every piece of session state: the transcript, history,
//! live suggestions, the contact dialogue and the tutorial overlay. Input is
//! routed once per event through [`InputRoute`]; the tutorial never routes,
//! it only observes what the normal dispatcher ran.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::command::{CommandContext, CommandRegistry, CommandSpec, Directive, Effect};
use crate::config::{AppConfig, TerminalSettings};
use crate::dialogue::{DialogueOutcome, DialogueSession};
use crate::error::{Result, TerminalError};
use crate::flags::FlagStore;
use crate::history::HistoryNavigator;
use crate::host::TerminalHost;
use crate::profile::Profile;
use crate::suggestion::SuggestionEngine;
use crate::transcript::{LineKind, Transcript};
use crate::tutorial::{
    Observation, TutorialGuide, TutorialStep, default_tutorial_steps, normalize_command_line,
};

const BANNER: [&str; 5] = [
    r"  _                      __       _ _       ",
    r" | |_ ___ _ __ _ __ ___ / _| ___ | (_) ___  ",
    r" | __/ _ \ '__| '_ ` _ \ |_ / _ \| | |/ _ \ ",
    r" | ||  __/ |  | | | | | |  _| (_) | | | (_) |",
    r"  \__\___|_|  |_| |_| |_|_|  \___/|_|_|\___/ ",
];

/// Which handler owns the next submitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRoute {
    Normal,
    Dialogue,
}

/// A submission accepted by [`Terminal::begin_submit`] and not yet dispatched.
#[must_use = "a pending submission keeps the terminal busy until finished"]
#[derive(Debug)]
pub struct PendingSubmission {
    raw: String,
}

/// Builder for [`Terminal`]. All validation happens in [`TerminalBuilder::build`].
pub struct TerminalBuilder {
    host: Arc<dyn TerminalHost>,
    flags: Arc<dyn FlagStore>,
    commands: Option<Vec<CommandSpec>>,
    tutorial_steps: Option<Vec<TutorialStep>>,
    profile: Profile,
    settings: TerminalSettings,
}

impl TerminalBuilder {
    pub fn new(host: Arc<dyn TerminalHost>, flags: Arc<dyn FlagStore>) -> Self {
        Self {
            host,
            flags,
            commands: None,
            tutorial_steps: None,
            profile: Profile::default(),
            settings: TerminalSettings::default(),
        }
    }

    /// Replaces the built-in command table.
    pub fn commands(mut self, commands: Vec<CommandSpec>) -> Self {
        self.commands = Some(commands);
        self
    }

    /// Replaces the built-in tour.
    pub fn tutorial_steps(mut self, steps: Vec<TutorialStep>) -> Self {
        self.tutorial_steps = Some(steps);
        self
    }

    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn settings(mut self, settings: TerminalSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Applies settings, profile and (if present) the tour from a loaded config.
    pub fn config(mut self, config: &AppConfig) -> Self {
        self.settings = config.terminal.clone();
        self.profile = config.profile.clone();
        self.tutorial_steps = Some(config.tutorial_steps());
        self
    }

    /// Validates the registry and tour and reads the durable flags.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Config`] for duplicate or invalid command
    /// spellings, a malformed tour, or a tour command whose verb is not
    /// registered.
    pub fn build(self) -> Result<Terminal> {
        let registry = match self.commands {
            Some(commands) => CommandRegistry::new(commands)?,
            None => CommandRegistry::with_builtins()?,
        };

        let steps = self.tutorial_steps.unwrap_or_else(default_tutorial_steps);
        let mut tutorial = TutorialGuide::new(steps)?;
        validate_tutorial_commands(&tutorial, &registry)?;
        tutorial.load_flags(self.flags.as_ref());

        let suggestions = SuggestionEngine::from_registry(&registry);
        info!(
            "[Terminal] Built with {} commands and {} tour steps",
            registry.len(),
            tutorial.len()
        );

        Ok(Terminal {
            registry,
            suggestions,
            profile: self.profile,
            settings: self.settings,
            host: self.host,
            flags: self.flags,
            transcript: Transcript::new(),
            history: HistoryNavigator::new(),
            dialogue: DialogueSession::new(),
            tutorial,
            raw_input: String::new(),
            live_suggestions: Vec::new(),
            selected_suggestion: 0,
            processing: false,
            booted: false,
        })
    }
}

fn validate_tutorial_commands(tutorial: &TutorialGuide, registry: &CommandRegistry) -> Result<()> {
    for (index, step) in tutorial.steps().iter().enumerate() {
        for command in step.accepted_commands() {
            let verb = command.split_whitespace().next().unwrap_or_default();
            if registry.lookup(verb).is_none() {
                return Err(TerminalError::config(format!(
                    "tutorial step {} ('{}') expects '{}', but '{}' is not a registered command",
                    index + 1,
                    step.title,
                    command,
                    verb
                )));
            }
        }
    }
    Ok(())
}

/// One interactive session.
pub struct Terminal {
    registry: CommandRegistry,
    suggestions: SuggestionEngine,
    profile: Profile,
    settings: TerminalSettings,
    host: Arc<dyn TerminalHost>,
    flags: Arc<dyn FlagStore>,
    transcript: Transcript,
    history: HistoryNavigator,
    dialogue: DialogueSession,
    tutorial: TutorialGuide,
    raw_input: String,
    live_suggestions: Vec<String>,
    selected_suggestion: usize,
    processing: bool,
    booted: bool,
}

impl Terminal {
    pub fn builder(host: Arc<dyn TerminalHost>, flags: Arc<dyn FlagStore>) -> TerminalBuilder {
        TerminalBuilder::new(host, flags)
    }

    pub fn route(&self) -> InputRoute {
        if self.dialogue.is_active() {
            InputRoute::Dialogue
        } else {
            InputRoute::Normal
        }
    }

    /// Appends the banner and, on a first visit, the tour offer. Runs once.
    pub fn boot(&mut self) {
        if self.booted {
            return;
        }
        self.booted = true;

        for line in BANNER {
            self.transcript.push(LineKind::Ascii, line);
        }
        self.transcript.push(
            LineKind::Info,
            format!(
                "Welcome to {}'s portfolio. Type `help` to get started.",
                self.profile.name
            ),
        );

        if self.settings.show_welcome && self.tutorial.should_offer() {
            self.transcript
                .push(LineKind::Tutorial, "First time here? Take the quick guided tour:");
            self.transcript.push_clickable(
                LineKind::Tutorial,
                "  → tutorial       start the tour",
                "tutorial",
            );
            self.transcript.push_clickable(
                LineKind::Tutorial,
                "  → tutorial skip  no thanks",
                "tutorial skip",
            );
        }
    }

    /// Prompt to show before the input buffer.
    pub fn prompt(&self) -> String {
        match self.route() {
            InputRoute::Dialogue => format!("{} >", self.dialogue.step().prompt_label()),
            InputRoute::Normal => self.settings.prompt.clone(),
        }
    }

    // ----- submission -------------------------------------------------------

    /// Accepts `raw` for dispatch and marks the terminal busy.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Busy`] while another submission is in flight.
    pub fn begin_submit(&mut self, raw: &str) -> Result<PendingSubmission> {
        if self.processing {
            debug!("[Terminal] Rejected submission while busy: {:?}", raw);
            return Err(TerminalError::Busy);
        }
        self.processing = true;
        self.raw_input.clear();
        self.clear_suggestions();
        Ok(PendingSubmission {
            raw: raw.to_string(),
        })
    }

    /// Dispatches a pending submission and clears the busy flag.
    pub fn finish_submit(&mut self, pending: PendingSubmission) {
        self.dispatch(&pending.raw);
        self.processing = false;
    }

    /// `begin_submit` immediately followed by `finish_submit`.
    pub fn submit(&mut self, raw: &str) -> Result<()> {
        let pending = self.begin_submit(raw)?;
        self.finish_submit(pending);
        Ok(())
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Resubmits the command bound to a clickable line.
    ///
    /// Returns `Ok(false)` for unknown or non-clickable ids.
    pub fn activate_line(&mut self, id: u64) -> Result<bool> {
        let Some(command) = self
            .transcript
            .get(id)
            .filter(|line| line.clickable)
            .and_then(|line| line.bound_command.clone())
        else {
            return Ok(false);
        };
        debug!("[Terminal] Activated line {} -> {:?}", id, command);
        self.submit(&command)?;
        Ok(true)
    }

    /// Ctrl-C: clears the input buffer and cancels an active dialogue.
    ///
    /// Returns `true` if a dialogue was cancelled.
    pub fn interrupt(&mut self) -> bool {
        self.raw_input.clear();
        self.clear_suggestions();
        matches!(
            self.dialogue.cancel(&mut self.transcript),
            DialogueOutcome::Cancelled
        )
    }

    // ----- dispatch ---------------------------------------------------------

    /// Runs one line through whichever handler currently owns input.
    pub fn dispatch(&mut self, raw: &str) {
        let line = raw.trim();
        match self.route() {
            InputRoute::Dialogue => self.dispatch_dialogue(line),
            InputRoute::Normal => self.dispatch_command(line),
        }
    }

    fn dispatch_dialogue(&mut self, answer: &str) {
        self.transcript.push(LineKind::Input, answer);
        let outcome = self.dialogue.handle(answer, &mut self.transcript);
        if let DialogueOutcome::Submitted(submission) = outcome {
            match self.host.submit_contact(&submission) {
                Ok(()) => {
                    info!("[Terminal] Contact message from {} delivered", submission.email);
                    self.transcript.push(
                        LineKind::Success,
                        format!("Thanks, {}! Your message is on its way.", submission.name),
                    );
                }
                Err(e) => {
                    warn!("[Terminal] Contact delivery failed: {}", e);
                    self.transcript.push(
                        LineKind::Error,
                        format!("Could not send your message: {}", e),
                    );
                }
            }
        }
    }

    fn dispatch_command(&mut self, line: &str) {
        if line.is_empty() {
            // Only ungated steps react to Enter; anything else appends nothing.
            let ungated = self
                .tutorial
                .current_step()
                .is_some_and(|step| !step.is_gated());
            if ungated && self.tutorial.continue_signal(&mut self.transcript, self.flags.as_ref()) {
                debug!("[Terminal] Empty input continued the tour");
            }
            return;
        }

        self.transcript.push(LineKind::Input, line);
        self.history.record(line);

        let mut tokens = line.split_whitespace();
        let verb = tokens.next().unwrap_or_default().to_lowercase();
        let args: Vec<String> = tokens.map(str::to_string).collect();
        let observed_by_tour = self.tutorial.is_active();

        let resolved = self
            .registry
            .lookup(&verb)
            .map(|spec| (spec.name, spec.handler));

        match resolved {
            Some((name, handler)) => {
                debug!("[Terminal] Dispatching '{}' with {} args", name, args.len());
                let mut ctx = CommandContext::new(
                    &mut self.transcript,
                    &self.profile,
                    &self.registry,
                    &self.suggestions,
                    &self.history,
                    self.tutorial.phase(),
                );
                handler(&mut ctx, &args);
                let (effect, directive) = ctx.into_parts();
                if let Some(effect) = effect {
                    self.apply_effect(effect);
                }
                if let Some(directive) = directive {
                    self.apply_directive(directive);
                }
            }
            None => self.report_unknown(&verb),
        }

        // A dialogue that just started owns the next line, so no tour hint.
        let dialogue_started = self.route() == InputRoute::Dialogue;
        if observed_by_tour && self.tutorial.is_active() && !dialogue_started {
            let expected = self
                .tutorial
                .current_step()
                .and_then(|step| step.expected_command.clone());
            let observation = self.tutorial.observe(
                &normalize_command_line(line),
                resolved.map(|(name, _)| name),
                &mut self.transcript,
                self.flags.as_ref(),
            );
            if let (Observation::Mismatch, Some(expected)) = (observation, expected) {
                debug!("[Terminal] {}", TerminalError::TutorialMismatch { expected });
            }
        }
    }

    fn report_unknown(&mut self, verb: &str) {
        let err = TerminalError::unknown_command(verb);
        debug!("[Terminal] {}", err);
        self.transcript.push(LineKind::Error, err.to_string());

        let candidates = self.suggestions.correct(verb);
        if let Some(best) = candidates.first() {
            self.transcript.push_clickable(
                LineKind::Info,
                format!("Did you mean: {}?", candidates.join(", ")),
                best.clone(),
            );
        }
    }

    fn apply_effect(&self, effect: Effect) {
        debug!("[Terminal] Effect {:?}", effect);
        match effect {
            Effect::Navigate { section } => self.host.navigate_to_section(&section),
            Effect::ToggleTheme => self.host.toggle_theme(),
            Effect::Download {
                path,
                suggested_name,
            } => self.host.trigger_file_download(&path, &suggested_name),
            Effect::OpenSubmodule { name } => self.host.open_submodule(&name),
            Effect::Notify { text, severity } => self.host.emit_notification(&text, severity),
        }
    }

    fn apply_directive(&mut self, directive: Directive) {
        debug!("[Terminal] Directive {:?}", directive);
        let flags = self.flags.as_ref();
        match directive {
            Directive::StartDialogue => self.dialogue.start(&mut self.transcript),
            Directive::StartTutorial => self.tutorial.start(&mut self.transcript),
            Directive::DeclineTutorial => self.tutorial.decline(&mut self.transcript, flags),
            Directive::ContinueTutorial => {
                self.tutorial.continue_signal(&mut self.transcript, flags);
            }
            Directive::SkipTutorialStep => self.tutorial.skip_step(&mut self.transcript, flags),
            Directive::SkipTutorial => self.tutorial.skip_all(&mut self.transcript, flags),
            Directive::ExitTutorial => self.tutorial.exit(&mut self.transcript),
            Directive::ClearTranscript => self.transcript.clear(),
        }
    }

    // ----- input buffer -----------------------------------------------------

    /// Replaces the input buffer and recomputes live completions.
    pub fn set_input(&mut self, text: &str) {
        self.raw_input = text.to_string();
        self.selected_suggestion = 0;
        self.live_suggestions = if self.dialogue.is_active() || text.trim().is_empty() {
            Vec::new()
        } else {
            self.suggestions.live_complete(text.trim_start())
        };
    }

    pub fn select_next_suggestion(&mut self) -> Option<&str> {
        let len = self.live_suggestions.len();
        if len == 0 {
            return None;
        }
        self.selected_suggestion = (self.selected_suggestion + 1) % len;
        self.selected_suggestion()
    }

    pub fn select_previous_suggestion(&mut self) -> Option<&str> {
        let len = self.live_suggestions.len();
        if len == 0 {
            return None;
        }
        self.selected_suggestion = (self.selected_suggestion + len - 1) % len;
        self.selected_suggestion()
    }

    /// Copies suggestion `index` into the input buffer.
    ///
    /// Returns `false` (and changes nothing) if `index` is out of range.
    pub fn accept_suggestion(&mut self, index: usize) -> bool {
        let Some(candidate) = self.live_suggestions.get(index).cloned() else {
            return false;
        };
        self.raw_input = candidate;
        self.clear_suggestions();
        true
    }

    pub fn recall_older(&mut self) -> &str {
        self.raw_input = self.history.recall_older();
        self.clear_suggestions();
        &self.raw_input
    }

    pub fn recall_newer(&mut self) -> &str {
        self.raw_input = self.history.recall_newer();
        self.clear_suggestions();
        &self.raw_input
    }

    fn clear_suggestions(&mut self) {
        self.live_suggestions.clear();
        self.selected_suggestion = 0;
    }

    // ----- accessors --------------------------------------------------------

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn suggestions(&self) -> &[String] {
        &self.live_suggestions
    }

    pub fn selected_suggestion_index(&self) -> usize {
        self.selected_suggestion
    }

    pub fn selected_suggestion(&self) -> Option<&str> {
        self.live_suggestions
            .get(self.selected_suggestion)
            .map(String::as_str)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn history(&self) -> &HistoryNavigator {
        &self.history
    }

    pub fn dialogue(&self) -> &DialogueSession {
        &self.dialogue
    }

    pub fn tutorial(&self) -> &TutorialGuide {
        &self.tutorial
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn suggestion_engine(&self) -> &SuggestionEngine {
        &self.suggestions
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn settings(&self) -> &TerminalSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{InMemoryFlagStore, TUTORIAL_COMPLETED_KEY, TUTORIAL_SKIPPED_KEY};
    use crate::host::NoopHost;

    fn terminal() -> Terminal {
        terminal_with_flags(Arc::new(InMemoryFlagStore::new()))
    }

    fn terminal_with_flags(flags: Arc<InMemoryFlagStore>) -> Terminal {
        TerminalBuilder::new(Arc::new(NoopHost), flags).build().unwrap()
    }

    fn kinds(terminal: &Terminal) -> Vec<LineKind> {
        terminal.transcript().lines().iter().map(|l| l.kind).collect()
    }

    #[test]
    fn test_input_is_echoed_before_output() {
        let mut terminal = terminal();
        terminal.dispatch("  WhoAmI  ");
        let first = &terminal.transcript().lines()[0];
        assert_eq!(first.kind, LineKind::Input);
        assert_eq!(first.text, "WhoAmI");
        assert!(terminal.transcript().len() > 1);
    }

    #[test]
    fn test_empty_input_appends_nothing() {
        let mut terminal = terminal();
        terminal.dispatch("   ");
        assert!(terminal.transcript().is_empty());
        assert!(terminal.history().is_empty());
    }

    #[test]
    fn test_empty_input_on_gated_step_appends_nothing() {
        let mut terminal = terminal();
        terminal.submit("tutorial").unwrap();
        assert!(terminal.tutorial().current_step().unwrap().is_gated());
        let len = terminal.transcript().len();

        terminal.submit("").unwrap();
        assert_eq!(terminal.transcript().len(), len);
        assert_eq!(terminal.tutorial().step_index(), 0);
    }

    #[test]
    fn test_builder_uses_configured_tour() {
        let config = AppConfig::from_toml_str(
            r#"
            [[tutorial]]
            title = "Only step"
            expected_command = "whoami"
            "#,
        )
        .unwrap();
        let terminal = TerminalBuilder::new(Arc::new(NoopHost), Arc::new(InMemoryFlagStore::new()))
            .config(&config)
            .build()
            .unwrap();
        assert_eq!(terminal.tutorial().len(), 1);
    }

    #[test]
    fn test_unknown_command_with_and_without_candidates() {
        let mut terminal = terminal();
        terminal.dispatch("whoam");
        assert_eq!(kinds(&terminal), vec![LineKind::Input, LineKind::Error, LineKind::Info]);
        let info = &terminal.transcript().lines()[2];
        assert_eq!(info.bound_command.as_deref(), Some("whoami"));

        terminal.dispatch("zzzzzzzzzz");
        let last = terminal.transcript().last().unwrap();
        assert_eq!(last.kind, LineKind::Error);
        assert_eq!(last.text, "command not found: zzzzzzzzzz");
    }

    #[test]
    fn test_busy_gate() {
        let mut terminal = terminal();
        let pending = terminal.begin_submit("whoami").unwrap();
        assert!(terminal.is_processing());
        assert!(terminal.begin_submit("skills").unwrap_err().is_busy());
        terminal.finish_submit(pending);
        assert!(!terminal.is_processing());
        assert_eq!(terminal.history().entries(), ["whoami"]);
        assert!(terminal.submit("skills").is_ok());
    }

    #[test]
    fn test_set_input_and_accept_suggestion() {
        let mut terminal = terminal();
        terminal.set_input("s");
        assert_eq!(terminal.suggestions(), ["skills", "social", "skip", "sudo"]);
        assert_eq!(terminal.select_next_suggestion(), Some("social"));
        assert_eq!(terminal.select_previous_suggestion(), Some("skills"));
        assert_eq!(terminal.select_previous_suggestion(), Some("sudo"));

        assert!(!terminal.accept_suggestion(9));
        assert_eq!(terminal.raw_input(), "s");
        assert!(terminal.accept_suggestion(1));
        assert_eq!(terminal.raw_input(), "social");
        assert!(terminal.suggestions().is_empty());

        terminal.set_input("   ");
        assert!(terminal.suggestions().is_empty());
    }

    #[test]
    fn test_recall_writes_input_buffer() {
        let mut terminal = terminal();
        terminal.submit("whoami").unwrap();
        terminal.submit("skills").unwrap();
        assert_eq!(terminal.recall_older(), "skills");
        assert_eq!(terminal.recall_older(), "whoami");
        assert_eq!(terminal.recall_newer(), "skills");
        assert_eq!(terminal.recall_newer(), "");
        assert_eq!(terminal.raw_input(), "");
    }

    #[test]
    fn test_dialogue_owns_routing_and_skips_history() {
        let mut terminal = terminal();
        terminal.submit("contact").unwrap();
        assert_eq!(terminal.route(), InputRoute::Dialogue);
        assert_eq!(terminal.prompt(), "name >");

        terminal.set_input("he");
        assert!(terminal.suggestions().is_empty());

        terminal.submit("help").unwrap();
        assert_eq!(terminal.dialogue().state().name, "help");
        assert_eq!(terminal.history().entries(), ["contact"]);

        assert!(terminal.interrupt());
        assert_eq!(terminal.route(), InputRoute::Normal);
        assert!(!terminal.interrupt());
    }

    #[test]
    fn test_boot_offers_tour_once() {
        let mut terminal = terminal();
        terminal.boot();
        let offered: Vec<_> = terminal
            .transcript()
            .lines()
            .iter()
            .filter_map(|l| l.bound_command.as_deref())
            .collect();
        assert_eq!(offered, vec!["tutorial", "tutorial skip"]);

        let len = terminal.transcript().len();
        terminal.boot();
        assert_eq!(terminal.transcript().len(), len);
    }

    #[test]
    fn test_boot_without_offer_when_flag_set() {
        let flags = Arc::new(InMemoryFlagStore::with_flags([(TUTORIAL_COMPLETED_KEY, true)]));
        let mut terminal = terminal_with_flags(flags);
        terminal.boot();
        assert!(
            terminal
                .transcript()
                .lines()
                .iter()
                .all(|l| !l.clickable)
        );
    }

    #[test]
    fn test_tutorial_skip_from_welcome_persists_flag() {
        let flags = Arc::new(InMemoryFlagStore::new());
        let mut terminal = terminal_with_flags(flags.clone());
        terminal.boot();
        let skip_line = terminal
            .transcript()
            .lines()
            .iter()
            .find(|l| l.bound_command.as_deref() == Some("tutorial skip"))
            .map(|l| l.id)
            .unwrap();
        assert!(terminal.activate_line(skip_line).unwrap());
        assert!(flags.get(TUTORIAL_SKIPPED_KEY));
        assert!(!terminal.tutorial().is_active());
    }

    #[test]
    fn test_activate_non_clickable_line_is_noop() {
        let mut terminal = terminal();
        terminal.submit("echo hi").unwrap();
        let len = terminal.transcript().len();
        assert!(!terminal.activate_line(0).unwrap());
        assert!(!terminal.activate_line(999).unwrap());
        assert_eq!(terminal.transcript().len(), len);
    }

    #[test]
    fn test_clear_keeps_ids_monotonic() {
        let mut terminal = terminal();
        terminal.submit("whoami").unwrap();
        let next = terminal.transcript().next_id();
        terminal.submit("clear").unwrap();
        assert!(terminal.transcript().is_empty());
        terminal.submit("whoami").unwrap();
        assert!(terminal.transcript().lines()[0].id >= next);
    }

    #[test]
    fn test_build_rejects_unregistered_tour_verb() {
        let steps = vec![TutorialStep::gated("Bad", &[], "teleport home", &[])];
        let err = TerminalBuilder::new(Arc::new(NoopHost), Arc::new(InMemoryFlagStore::new()))
            .tutorial_steps(steps)
            .build()
            .err()
            .unwrap();
        assert!(err.is_config());
    }

    #[test]
    fn test_build_rejects_empty_tour() {
        let result = TerminalBuilder::new(Arc::new(NoopHost), Arc::new(InMemoryFlagStore::new()))
            .tutorial_steps(Vec::new())
            .build();
        assert!(result.is_err());
    }
}
