//! Filesystem side of termfolio: platform paths, config loading, the durable
//! flag file and the contact outbox.

pub mod config_loader;
pub mod contact_outbox;
pub mod paths;
pub mod toml_flag_store;

pub use crate::config_loader::{ConfigSource, LoadedConfig, load_config, load_config_file};
pub use crate::contact_outbox::{JsonlContactOutbox, OutboxEntry};
pub use crate::paths::{PathError, TermfolioPaths};
pub use crate::toml_flag_store::TomlFlagStore;
