//! Guided tour over a fixed, ordered list of steps.
//!
//! The tour is an overlay: it never owns input routing. After every dispatch
//! the terminal reports the normalized command line through
//! [`TutorialGuide::observe`], which either advances, re-emits the current
//! hint, or ignores tour-control verbs.
//!
//! ```text
//! Idle --start--> Step(0) --advance|skip--> ... Step(N-1) --advance|skip--> Completed
//!                    \------------- skip all -------------> Skipped
//! Step(i) --exit--> Idle
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, TerminalError};
use crate::flags::{FlagStore, TUTORIAL_COMPLETED_KEY, TUTORIAL_SKIPPED_KEY};
use crate::transcript::{LineKind, Transcript};

/// Registry names that steer the tour itself and never count as a wrong answer.
const CONTROL_COMMANDS: [&str; 5] = ["help", "skip", "exit", "next", "tutorial"];

/// One unit of the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialStep {
    pub title: String,
    #[serde(default)]
    pub lines: Vec<String>,
    /// Shown when a different command is entered; derived from
    /// `expected_command` when empty.
    #[serde(default)]
    pub hint: String,
    /// Command line that completes the step. `None` means the step advances
    /// on Enter or `next`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_command: Option<String>,
    #[serde(default)]
    pub alternate_commands: Vec<String>,
}

impl TutorialStep {
    pub fn gated(title: &str, lines: &[&str], expected: &str, alternates: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            lines: lines.iter().map(|s| s.to_string()).collect(),
            hint: String::new(),
            expected_command: Some(expected.to_string()),
            alternate_commands: alternates.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn ungated(title: &str, lines: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            lines: lines.iter().map(|s| s.to_string()).collect(),
            hint: String::new(),
            expected_command: None,
            alternate_commands: Vec::new(),
        }
    }

    pub fn is_gated(&self) -> bool {
        self.expected_command.is_some()
    }

    /// Every accepted command line (expected first), normalized.
    pub fn accepted_commands(&self) -> impl Iterator<Item = String> + '_ {
        self.expected_command
            .iter()
            .chain(self.alternate_commands.iter())
            .map(|command| normalize_command_line(command))
    }

    pub fn accepts(&self, normalized_line: &str) -> bool {
        self.accepted_commands().any(|command| command == normalized_line)
    }

    fn hint_text(&self) -> String {
        if !self.hint.trim().is_empty() {
            return self.hint.clone();
        }
        match &self.expected_command {
            Some(expected) => format!("Type `{}` to continue.", expected),
            None => "Press Enter or type `next` to continue.".to_string(),
        }
    }
}

/// Lowercases and collapses whitespace: `"  Goto   About "` -> `"goto about"`.
pub fn normalize_command_line(line: &str) -> String {
    line.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Where the tour is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum TutorialPhase {
    Idle,
    Step(usize),
    /// Walked to the end; terminal for the session
    Completed,
    /// Abandoned with `skip all`; terminal for the session
    Skipped,
}

/// What [`TutorialGuide::observe`] did with a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Advanced,
    /// Wrong command; the hint was re-emitted
    Mismatch,
    /// Tour inactive, or a tour-control verb
    Ignored,
}

/// Sequential state machine over [`TutorialStep`]s.
#[derive(Debug)]
pub struct TutorialGuide {
    steps: Vec<TutorialStep>,
    phase: TutorialPhase,
    completed_flag: bool,
    skipped_flag: bool,
}

impl TutorialGuide {
    /// Validates the step table. A malformed table is a configuration error.
    pub fn new(steps: Vec<TutorialStep>) -> Result<Self> {
        if steps.is_empty() {
            return Err(TerminalError::config("tutorial has no steps"));
        }
        for (index, step) in steps.iter().enumerate() {
            if step.title.trim().is_empty() {
                return Err(TerminalError::config(format!(
                    "tutorial step {} has an empty title",
                    index + 1
                )));
            }
            if let Some(expected) = &step.expected_command {
                if expected.trim().is_empty() {
                    return Err(TerminalError::config(format!(
                        "tutorial step {} ('{}') has an empty expected command",
                        index + 1,
                        step.title
                    )));
                }
            } else if !step.alternate_commands.is_empty() {
                return Err(TerminalError::config(format!(
                    "tutorial step {} ('{}') lists alternates without an expected command",
                    index + 1,
                    step.title
                )));
            }
            if step.alternate_commands.iter().any(|alt| alt.trim().is_empty()) {
                return Err(TerminalError::config(format!(
                    "tutorial step {} ('{}') has an empty alternate command",
                    index + 1,
                    step.title
                )));
            }
        }

        Ok(Self {
            steps,
            phase: TutorialPhase::Idle,
            completed_flag: false,
            skipped_flag: false,
        })
    }

    /// Reads the durable flags once at session start.
    pub fn load_flags(&mut self, flags: &dyn FlagStore) {
        self.completed_flag = flags.get(TUTORIAL_COMPLETED_KEY);
        self.skipped_flag = flags.get(TUTORIAL_SKIPPED_KEY);
    }

    pub fn steps(&self) -> &[TutorialStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn phase(&self) -> TutorialPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, TutorialPhase::Step(_))
    }

    /// Current step index (0 when idle, `len` once finished).
    pub fn step_index(&self) -> usize {
        match self.phase {
            TutorialPhase::Idle => 0,
            TutorialPhase::Step(index) => index,
            TutorialPhase::Completed | TutorialPhase::Skipped => self.steps.len(),
        }
    }

    pub fn current_step(&self) -> Option<&TutorialStep> {
        match self.phase {
            TutorialPhase::Step(index) => self.steps.get(index),
            _ => None,
        }
    }

    pub fn completed_flag(&self) -> bool {
        self.completed_flag
    }

    pub fn skipped_flag(&self) -> bool {
        self.skipped_flag
    }

    /// Whether the first-visit welcome offer should be shown.
    pub fn should_offer(&self) -> bool {
        !self.completed_flag && !self.skipped_flag
    }

    /// `Idle --start--> Step(0)`.
    pub fn start(&mut self, transcript: &mut Transcript) {
        match self.phase {
            TutorialPhase::Idle => {
                info!("[Tutorial] Started ({} steps)", self.steps.len());
                transcript.push(
                    LineKind::Tutorial,
                    "Starting the guided tour. Type `skip` to skip a step, `exit` to leave.",
                );
                self.enter_step(0, transcript);
            }
            TutorialPhase::Step(index) => {
                transcript.push(LineKind::Info, "The tour is already running.");
                self.emit_step(index, transcript);
            }
            TutorialPhase::Completed => {
                transcript.push(
                    LineKind::Info,
                    "You've already finished the tour. Type `help` to explore on your own.",
                );
            }
            TutorialPhase::Skipped => {
                transcript.push(
                    LineKind::Info,
                    "The tour was skipped for this session. Type `help` to explore.",
                );
            }
        }
    }

    /// Inspects a just-dispatched command line.
    ///
    /// `command` is the resolved registry name, or `None` for unknown input.
    pub fn observe(
        &mut self,
        normalized_line: &str,
        command: Option<&str>,
        transcript: &mut Transcript,
        flags: &dyn FlagStore,
    ) -> Observation {
        let Some(step) = self.current_step() else {
            return Observation::Ignored;
        };

        if step.is_gated() && step.accepts(normalized_line) {
            let TutorialPhase::Step(index) = self.phase else {
                return Observation::Ignored;
            };
            transcript.push(
                LineKind::Success,
                format!("✓ Nice! Step {} of {} complete.", index + 1, self.steps.len()),
            );
            self.advance(transcript, flags);
            return Observation::Advanced;
        }

        if command.is_some_and(|name| CONTROL_COMMANDS.contains(&name)) {
            return Observation::Ignored;
        }

        let hint = step.hint_text();
        transcript.push(LineKind::Tutorial, format!("Not quite. {}", hint));
        Observation::Mismatch
    }

    /// Generic "continue" signal (Enter on empty input, or `next`).
    ///
    /// Advances ungated steps; gated steps re-emit their hint.
    pub fn continue_signal(&mut self, transcript: &mut Transcript, flags: &dyn FlagStore) -> bool {
        let Some(step) = self.current_step() else {
            return false;
        };
        if step.is_gated() {
            let hint = step.hint_text();
            transcript.push(LineKind::Tutorial, hint);
            return false;
        }
        self.advance(transcript, flags);
        true
    }

    /// `Step(i) --skip--> Step(i+1)`, or `Completed` from the last step.
    pub fn skip_step(&mut self, transcript: &mut Transcript, flags: &dyn FlagStore) {
        if let TutorialPhase::Step(index) = self.phase {
            info!("[Tutorial] Skipped step {}", index + 1);
            transcript.push(LineKind::Info, format!("Skipped step {}.", index + 1));
            self.advance(transcript, flags);
        }
    }

    /// Jumps from any step to `Skipped` and persists the skipped flag.
    pub fn skip_all(&mut self, transcript: &mut Transcript, flags: &dyn FlagStore) {
        if !self.is_active() {
            return;
        }
        self.phase = TutorialPhase::Skipped;
        info!("[Tutorial] Skipped to the end");
        self.persist_skipped(flags);
        transcript.push(
            LineKind::Tutorial,
            "Tour skipped. Type `help` whenever you want the full command list.",
        );
    }

    /// `Step(i) --exit--> Idle`. Leaves both durable flags untouched.
    pub fn exit(&mut self, transcript: &mut Transcript) {
        if !self.is_active() {
            return;
        }
        self.phase = TutorialPhase::Idle;
        info!("[Tutorial] Exited");
        transcript.push(
            LineKind::Tutorial,
            "Left the tour. Type `tutorial` to start again from the beginning.",
        );
    }

    /// Dismisses the first-visit offer without starting the tour.
    pub fn decline(&mut self, transcript: &mut Transcript, flags: &dyn FlagStore) {
        if self.is_active() {
            self.skip_all(transcript, flags);
            return;
        }
        self.persist_skipped(flags);
        transcript.push(
            LineKind::Info,
            "No problem, the tour won't be offered again. Type `tutorial` any time.",
        );
    }

    fn advance(&mut self, transcript: &mut Transcript, flags: &dyn FlagStore) {
        let TutorialPhase::Step(index) = self.phase else {
            return;
        };
        let next = index + 1;
        if next < self.steps.len() {
            self.enter_step(next, transcript);
        } else {
            self.complete(transcript, flags);
        }
    }

    fn enter_step(&mut self, index: usize, transcript: &mut Transcript) {
        self.phase = TutorialPhase::Step(index);
        self.emit_step(index, transcript);
    }

    fn emit_step(&self, index: usize, transcript: &mut Transcript) {
        let step = &self.steps[index];
        transcript.push(
            LineKind::Tutorial,
            format!("── Step {}/{}: {} ──", index + 1, self.steps.len(), step.title),
        );
        for line in &step.lines {
            transcript.push(LineKind::Tutorial, line.clone());
        }
        match &step.expected_command {
            Some(expected) => {
                transcript.push_clickable(
                    LineKind::Tutorial,
                    format!("→ Try: {}", expected),
                    expected.clone(),
                );
            }
            None => {
                transcript.push_clickable(LineKind::Tutorial, step.hint_text(), "next");
            }
        }
    }

    fn complete(&mut self, transcript: &mut Transcript, flags: &dyn FlagStore) {
        self.phase = TutorialPhase::Completed;
        info!("[Tutorial] Completed");
        if !self.completed_flag {
            match flags.set(TUTORIAL_COMPLETED_KEY, true) {
                Ok(()) => self.completed_flag = true,
                Err(e) => warn!("[Tutorial] Failed to persist completion flag: {}", e),
            }
        }
        transcript.push(LineKind::Success, "🎉 Tour complete! You know your way around.");
        transcript.push(
            LineKind::Tutorial,
            "Type `help` for every command, or `contact` to say hello.",
        );
    }

    fn persist_skipped(&mut self, flags: &dyn FlagStore) {
        if self.skipped_flag {
            return;
        }
        match flags.set(TUTORIAL_SKIPPED_KEY, true) {
            Ok(()) => self.skipped_flag = true,
            Err(e) => warn!("[Tutorial] Failed to persist skipped flag: {}", e),
        }
    }
}

/// The built-in portfolio tour.
pub fn default_tutorial_steps() -> Vec<TutorialStep> {
    vec![
        TutorialStep::gated(
            "Welcome aboard",
            &[
                "This terminal is a tour of my work. Everything here is typed.",
                "Start by asking it what it can do.",
            ],
            "help",
            &["?", "man"],
        ),
        TutorialStep::gated(
            "Who's behind this?",
            &["Every shell has a `whoami`. This one answers with me."],
            "whoami",
            &[],
        ),
        TutorialStep::gated(
            "The toolbox",
            &["Curious what I work with? List the skills."],
            "skills",
            &["stack"],
        ),
        TutorialStep::gated(
            "Things I've built",
            &["Projects are where the skills turn into something real."],
            "projects",
            &["work", "portfolio"],
        ),
        TutorialStep::gated(
            "Getting around",
            &[
                "`goto <section>` scrolls the page for you.",
                "Jump to the projects section.",
            ],
            "goto projects",
            &["cd projects", "open projects", "nav projects"],
        ),
        TutorialStep::ungated(
            "Shortcuts",
            &[
                "Tab completes commands, ↑/↓ browse your history.",
                "Typos are fine too: try `skils` later and see what happens.",
            ],
        ),
        TutorialStep::gated(
            "Make it yours",
            &["Last one. Not a fan of the colors? Flip the theme."],
            "theme",
            &[],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::InMemoryFlagStore;

    fn guide() -> TutorialGuide {
        TutorialGuide::new(vec![
            TutorialStep::gated("One", &["first"], "help", &["?"]),
            TutorialStep::ungated("Two", &["second"]),
            TutorialStep::gated("Three", &["third"], "goto about", &["cd about"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_normalize_command_line() {
        assert_eq!(normalize_command_line("  Goto   About "), "goto about");
        assert_eq!(normalize_command_line(""), "");
    }

    #[test]
    fn test_rejects_malformed_tables() {
        assert!(TutorialGuide::new(vec![]).unwrap_err().is_config());

        let blank_title = TutorialStep::ungated("  ", &[]);
        assert!(TutorialGuide::new(vec![blank_title]).unwrap_err().is_config());

        let blank_expected = TutorialStep::gated("Step", &[], " ", &[]);
        assert!(TutorialGuide::new(vec![blank_expected]).unwrap_err().is_config());

        let blank_alternate = TutorialStep::gated("Step", &[], "help", &[""]);
        assert!(TutorialGuide::new(vec![blank_alternate]).unwrap_err().is_config());

        let mut orphan = TutorialStep::ungated("Step", &[]);
        orphan.alternate_commands.push("help".to_string());
        assert!(TutorialGuide::new(vec![orphan]).unwrap_err().is_config());
    }

    #[test]
    fn test_default_steps_are_valid() {
        assert!(TutorialGuide::new(default_tutorial_steps()).is_ok());
    }

    #[test]
    fn test_expected_command_advances_with_success_line_first() {
        let mut guide = guide();
        let flags = InMemoryFlagStore::new();
        let mut transcript = Transcript::new();
        guide.start(&mut transcript);
        let before = transcript.next_id();

        let observation = guide.observe("help", Some("help"), &mut transcript, &flags);

        assert_eq!(observation, Observation::Advanced);
        assert_eq!(guide.phase(), TutorialPhase::Step(1));
        let emitted = transcript.lines_from(before);
        assert_eq!(emitted[0].kind, LineKind::Success);
        assert!(emitted[1].text.contains("Step 2/3"));
    }

    #[test]
    fn test_alternate_command_is_accepted() {
        let mut guide = guide();
        let flags = InMemoryFlagStore::new();
        let mut transcript = Transcript::new();
        guide.start(&mut transcript);
        assert_eq!(
            guide.observe("?", Some("help"), &mut transcript, &flags),
            Observation::Advanced
        );
    }

    #[test]
    fn test_wrong_command_re_emits_hint() {
        let mut guide = guide();
        let flags = InMemoryFlagStore::new();
        let mut transcript = Transcript::new();
        guide.start(&mut transcript);

        let observation = guide.observe("whoami", Some("whoami"), &mut transcript, &flags);

        assert_eq!(observation, Observation::Mismatch);
        assert_eq!(guide.phase(), TutorialPhase::Step(0));
        assert!(transcript.last().unwrap().text.contains("`help`"));
    }

    #[test]
    fn test_control_verbs_are_ignored() {
        let mut guide = TutorialGuide::new(vec![TutorialStep::gated("One", &[], "whoami", &[])])
            .unwrap();
        let flags = InMemoryFlagStore::new();
        let mut transcript = Transcript::new();
        guide.start(&mut transcript);
        let before = transcript.len();

        for verb in ["help", "exit", "skip"] {
            assert_eq!(
                guide.observe(verb, Some(verb), &mut transcript, &flags),
                Observation::Ignored
            );
        }
        assert_eq!(transcript.len(), before);
    }

    #[test]
    fn test_full_line_must_match() {
        let mut guide = guide();
        let flags = InMemoryFlagStore::new();
        let mut transcript = Transcript::new();
        guide.start(&mut transcript);
        guide.observe("help", Some("help"), &mut transcript, &flags);
        guide.continue_signal(&mut transcript, &flags);

        assert_eq!(
            guide.observe("goto skills", Some("goto"), &mut transcript, &flags),
            Observation::Mismatch
        );
        assert_eq!(
            guide.observe("cd about", Some("goto"), &mut transcript, &flags),
            Observation::Advanced
        );
        assert_eq!(guide.phase(), TutorialPhase::Completed);
    }

    #[test]
    fn test_continue_only_advances_ungated_steps() {
        let mut guide = guide();
        let flags = InMemoryFlagStore::new();
        let mut transcript = Transcript::new();
        guide.start(&mut transcript);

        assert!(!guide.continue_signal(&mut transcript, &flags));
        assert_eq!(guide.step_index(), 0);

        guide.observe("help", Some("help"), &mut transcript, &flags);
        assert!(guide.continue_signal(&mut transcript, &flags));
        assert_eq!(guide.step_index(), 2);
    }

    #[test]
    fn test_repeated_skip_reaches_completed() {
        let mut guide = guide();
        let flags = InMemoryFlagStore::new();
        let mut transcript = Transcript::new();
        guide.start(&mut transcript);

        let mut last = guide.step_index();
        while guide.is_active() {
            guide.skip_step(&mut transcript, &flags);
            assert!(guide.step_index() >= last);
            last = guide.step_index();
        }
        assert_eq!(guide.phase(), TutorialPhase::Completed);
        assert!(flags.get(TUTORIAL_COMPLETED_KEY));
        assert!(!flags.get(TUTORIAL_SKIPPED_KEY));
    }

    #[test]
    fn test_exit_resets_without_flags() {
        let mut guide = guide();
        let flags = InMemoryFlagStore::new();
        let mut transcript = Transcript::new();
        guide.start(&mut transcript);
        guide.skip_step(&mut transcript, &flags);
        guide.exit(&mut transcript);

        assert_eq!(guide.phase(), TutorialPhase::Idle);
        assert_eq!(guide.step_index(), 0);
        assert_eq!(flags.write_count(), 0);

        guide.start(&mut transcript);
        assert_eq!(guide.phase(), TutorialPhase::Step(0));
    }

    #[test]
    fn test_skip_all_is_absorbing() {
        let mut guide = guide();
        let flags = InMemoryFlagStore::new();
        let mut transcript = Transcript::new();
        guide.start(&mut transcript);
        guide.skip_all(&mut transcript, &flags);

        assert_eq!(guide.phase(), TutorialPhase::Skipped);
        assert!(flags.get(TUTORIAL_SKIPPED_KEY));

        guide.start(&mut transcript);
        assert_eq!(guide.phase(), TutorialPhase::Skipped);
    }

    #[test]
    fn test_completion_flag_written_once() {
        let flags = InMemoryFlagStore::with_flags([(TUTORIAL_COMPLETED_KEY, true)]);
        let mut guide = guide();
        guide.load_flags(&flags);
        assert!(!guide.should_offer());

        let mut transcript = Transcript::new();
        guide.start(&mut transcript);
        while guide.is_active() {
            guide.skip_step(&mut transcript, &flags);
        }
        assert_eq!(flags.write_count(), 0);
    }

    #[test]
    fn test_decline_from_idle_sets_skipped_flag() {
        let mut guide = guide();
        let flags = InMemoryFlagStore::new();
        let mut transcript = Transcript::new();
        assert!(guide.should_offer());

        guide.decline(&mut transcript, &flags);

        assert_eq!(guide.phase(), TutorialPhase::Idle);
        assert!(flags.get(TUTORIAL_SKIPPED_KEY));
        assert!(!guide.should_offer());
    }
}
