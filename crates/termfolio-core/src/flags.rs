//! Durable boolean flags that survive a session.
//!
//! Only the guided tour writes here. The core never talks to storage
//! directly; it goes through an injected [`FlagStore`].

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::error::Result;

/// Set once the guided tour has been walked to the end.
pub const TUTORIAL_COMPLETED_KEY: &str = "tutorial_completed";
/// Set once the visitor dismisses or skips the guided tour.
pub const TUTORIAL_SKIPPED_KEY: &str = "tutorial_skipped";

/// Key-value store of persisted booleans.
///
/// Missing keys read as `false`.
pub trait FlagStore: Send + Sync {
    fn get(&self, key: &str) -> bool;

    fn set(&self, key: &str, value: bool) -> Result<()>;
}

/// Process-local [`FlagStore`], used in tests and when no state file is wanted.
#[derive(Debug, Default)]
pub struct InMemoryFlagStore {
    flags: Mutex<HashMap<String, bool>>,
    writes: Mutex<usize>,
}

impl InMemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `flags`.
    pub fn with_flags<'a>(flags: impl IntoIterator<Item = (&'a str, bool)>) -> Self {
        let store = Self::new();
        {
            let mut map = store.flags.lock().unwrap_or_else(PoisonError::into_inner);
            for (key, value) in flags {
                map.insert(key.to_string(), value);
            }
        }
        store
    }

    /// Number of `set` calls made so far.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FlagStore for InMemoryFlagStore {
    fn get(&self, key: &str) -> bool {
        self.flags
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied()
            .unwrap_or(false)
    }

    fn set(&self, key: &str, value: bool) -> Result<()> {
        self.flags
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
        *self.writes.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_false() {
        let store = InMemoryFlagStore::new();
        assert!(!store.get(TUTORIAL_COMPLETED_KEY));
    }

    #[test]
    fn test_set_and_get() {
        let store = InMemoryFlagStore::new();
        store.set(TUTORIAL_SKIPPED_KEY, true).unwrap();
        assert!(store.get(TUTORIAL_SKIPPED_KEY));
        assert!(!store.get(TUTORIAL_COMPLETED_KEY));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_with_flags() {
        let store = InMemoryFlagStore::with_flags([(TUTORIAL_COMPLETED_KEY, true)]);
        assert!(store.get(TUTORIAL_COMPLETED_KEY));
        assert_eq!(store.write_count(), 0);
    }
}
