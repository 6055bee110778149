//! Recall of previously submitted commands.

/// Ordered list of committed commands plus a browsing cursor.
///
/// The cursor counts back from the newest entry: `None` means the user is not
/// recalling, `Some(0)` is the most recent command. Browsing never mutates the
/// recorded entries.
#[derive(Debug, Clone, Default)]
pub struct HistoryNavigator {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted command. Blank commands are ignored.
    pub fn record(&mut self, command: &str) {
        let command = command.trim();
        if !command.is_empty() {
            self.entries.push(command.to_string());
        }
        self.cursor = None;
    }

    /// Steps one entry further into the past, clamping at the oldest.
    pub fn recall_older(&mut self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let oldest = self.entries.len() - 1;
        let next = match self.cursor {
            None => 0,
            Some(offset) => (offset + 1).min(oldest),
        };
        self.cursor = Some(next);
        self.current()
    }

    /// Steps one entry towards the present; past the newest yields `""`.
    pub fn recall_newer(&mut self) -> String {
        self.cursor = match self.cursor {
            None | Some(0) => None,
            Some(offset) => Some(offset - 1),
        };
        self.current()
    }

    fn current(&self) -> String {
        match self.cursor {
            Some(offset) => self.entries[self.entries.len() - 1 - offset].clone(),
            None => String::new(),
        }
    }

    /// Recorded commands, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Current cursor in the `[-1, len - 1]` convention.
    pub fn cursor(&self) -> isize {
        self.cursor.map_or(-1, |offset| offset as isize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
