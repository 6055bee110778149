//! Command registry and the built-in portfolio vocabulary.
//!
//! The registry is static data: a table of name, aliases and handler that is
//! validated once and never changes during a session. Handlers write to the
//! transcript through a [`CommandContext`] and may request at most one
//! external [`Effect`] plus one internal [`Directive`].
//!
//! # Module Structure
//!
//! - `registry`: `CommandSpec`, `CommandRegistry`, `CommandCategory`
//! - `context`: `CommandContext`, `Effect`, `Directive`
//! - `builtin`: the default command table and its handlers

pub mod builtin;
pub mod context;
pub mod registry;

pub use builtin::builtin_commands;
pub use context::{CommandContext, Directive, Effect};
pub use registry::{CommandCategory, CommandHandler, CommandRegistry, CommandSpec};
