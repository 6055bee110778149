//! Command table with case-insensitive name and alias lookup.

use std::collections::HashMap;
use std::fmt;

use crate::command::builtin::builtin_commands;
use crate::command::context::CommandContext;
use crate::error::{Result, TerminalError};

/// Handler invoked with the argument tokens (original case preserved).
pub type CommandHandler = fn(&mut CommandContext<'_>, &[String]);

/// Groups used by `help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    Portfolio,
    Navigation,
    Contact,
    Tutorial,
    Session,
    Fun,
}

impl CommandCategory {
    pub fn label(&self) -> &'static str {
        match self {
            CommandCategory::Portfolio => "Portfolio",
            CommandCategory::Navigation => "Navigation",
            CommandCategory::Contact => "Contact",
            CommandCategory::Tutorial => "Tutorial",
            CommandCategory::Session => "Session",
            CommandCategory::Fun => "Fun",
        }
    }

    pub fn all() -> &'static [CommandCategory] {
        &[
            CommandCategory::Portfolio,
            CommandCategory::Navigation,
            CommandCategory::Contact,
            CommandCategory::Tutorial,
            CommandCategory::Session,
            CommandCategory::Fun,
        ]
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One registry entry.
#[derive(Clone)]
pub struct CommandSpec {
    /// Primary spelling, also the only form offered by completion
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Usage format (e.g., "goto <section>")
    pub usage: &'static str,
    pub description: &'static str,
    pub category: CommandCategory,
    pub handler: CommandHandler,
}

impl CommandSpec {
    pub const fn new(
        name: &'static str,
        aliases: &'static [&'static str],
        usage: &'static str,
        description: &'static str,
        category: CommandCategory,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            aliases,
            usage,
            description,
            category,
            handler,
        }
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("usage", &self.usage)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Immutable, validated command table.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
    /// Lowercased name or alias -> index into `commands`
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Builds a registry, rejecting empty or whitespace-containing spellings
    /// and any name/alias collision (case-insensitive).
    pub fn new(commands: impl IntoIterator<Item = CommandSpec>) -> Result<Self> {
        let commands: Vec<CommandSpec> = commands.into_iter().collect();
        if commands.is_empty() {
            return Err(TerminalError::config("command registry is empty"));
        }

        let mut index = HashMap::new();
        for (position, spec) in commands.iter().enumerate() {
            for spelling in std::iter::once(&spec.name).chain(spec.aliases.iter()) {
                if spelling.is_empty() || spelling.chars().any(char::is_whitespace) {
                    return Err(TerminalError::config(format!(
                        "command '{}' has an invalid spelling '{}'",
                        spec.name, spelling
                    )));
                }
                let key = spelling.to_lowercase();
                if let Some(existing) = index.insert(key, position) {
                    return Err(TerminalError::config(format!(
                        "duplicate command spelling '{}' (used by '{}' and '{}')",
                        spelling, commands[existing].name, spec.name
                    )));
                }
            }
        }

        Ok(Self { commands, index })
    }

    /// Registry holding the built-in portfolio commands.
    pub fn with_builtins() -> Result<Self> {
        Self::new(builtin_commands().iter().cloned())
    }

    /// Exact, case-insensitive match against names and aliases.
    pub fn lookup(&self, token: &str) -> Option<&CommandSpec> {
        self.index
            .get(&token.to_lowercase())
            .map(|&position| &self.commands[position])
    }

    /// Primary names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|spec| spec.name)
    }

    pub fn all(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn in_category(&self, category: CommandCategory) -> impl Iterator<Item = &CommandSpec> {
        self.commands
            .iter()
            .filter(move |spec| spec.category == category)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
