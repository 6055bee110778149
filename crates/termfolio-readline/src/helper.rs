use std::borrow::Cow::{self, Borrowed, Owned};
use std::collections::HashSet;

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use termfolio_core::{CommandRegistry, SuggestionEngine};

/// Rustyline helper backed by the terminal's suggestion engine.
///
/// Completion and hints are switched off while the contact form owns input.
pub struct CliHelper {
    engine: SuggestionEngine,
    /// Every registered spelling, lowercased
    known: HashSet<String>,
    dialogue_active: bool,
}

impl CliHelper {
    pub fn new(registry: &CommandRegistry) -> Self {
        let known = registry
            .all()
            .iter()
            .flat_map(|spec| std::iter::once(&spec.name).chain(spec.aliases.iter()))
            .map(|spelling| spelling.to_lowercase())
            .collect();
        Self {
            engine: SuggestionEngine::from_registry(registry),
            known,
            dialogue_active: false,
        }
    }

    pub fn set_dialogue_active(&mut self, active: bool) {
        self.dialogue_active = active;
    }

    /// The verb being typed, if completion applies to it.
    fn partial_verb<'l>(&self, line: &'l str, pos: usize) -> Option<(usize, &'l str)> {
        if self.dialogue_active {
            return None;
        }
        let line = line.get(..pos)?;
        let verb = line.trim_start();
        if verb.is_empty() || verb.contains(char::is_whitespace) {
            return None;
        }
        Some((line.len() - verb.len(), verb))
    }

    fn is_known(&self, verb: &str) -> bool {
        self.known.contains(&verb.to_lowercase())
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let Some((start, verb)) = self.partial_verb(line, pos) else {
            return Ok((pos, vec![]));
        };
        let candidates = self
            .engine
            .live_complete(verb)
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: name,
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.dialogue_active {
            return Borrowed(line);
        }
        let verb = line.split_whitespace().next().unwrap_or_default();
        if !verb.is_empty() && self.is_known(verb) {
            let at = line.find(verb).unwrap_or(0) + verb.len();
            let (head, tail) = line.split_at(at);
            Owned(format!("{}{}", head.bright_cyan(), tail))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (_, verb) = self.partial_verb(line, pos)?;
        self.engine
            .live_complete(verb)
            .into_iter()
            .find(|name| name.len() > verb.len())
            .and_then(|name| name.get(verb.len()..).map(str::to_string))
    }
}

impl Validator for CliHelper {}
