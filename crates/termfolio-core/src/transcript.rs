//! Append-only session transcript.
//!
//! Every component writes to the terminal through [`Transcript`]. Lines are
//! immutable once appended and ordered only by their monotonic `id`.

use serde::{Deserialize, Serialize};

/// Visual category of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of what the user typed
    Input,
    /// Plain command output
    Output,
    Error,
    Success,
    Info,
    /// Pre-formatted art (banner, neofetch logo)
    Ascii,
    /// Guided tour prompts and hints
    Tutorial,
}

/// A single rendered line of session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub id: u64,
    pub kind: LineKind,
    pub text: String,
    /// Activating a clickable line resubmits `bound_command`
    pub clickable: bool,
    pub bound_command: Option<String>,
}

/// Ordered, append-only sequence of [`TranscriptLine`]s.
///
/// `clear` drops the visible lines but never rewinds the id counter, so ids
/// stay unique for the whole session. Renderers can watch [`Transcript::epoch`]
/// to detect a clear.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
    next_id: u64,
    epoch: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a plain line and returns its id.
    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) -> u64 {
        self.append(kind, text.into(), None)
    }

    /// Appends a line that replays `command` when activated.
    pub fn push_clickable(
        &mut self,
        kind: LineKind,
        text: impl Into<String>,
        command: impl Into<String>,
    ) -> u64 {
        self.append(kind, text.into(), Some(command.into()))
    }

    fn append(&mut self, kind: LineKind, text: String, bound_command: Option<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.lines.push(TranscriptLine {
            id,
            kind,
            text,
            clickable: bound_command.is_some(),
            bound_command,
        });
        id
    }

    /// Removes every visible line.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.epoch += 1;
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptLine> {
        self.lines.last()
    }

    /// Number of clears performed so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Id the next appended line will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn get(&self, id: u64) -> Option<&TranscriptLine> {
        self.lines
            .binary_search_by_key(&id, |line| line.id)
            .ok()
            .map(|index| &self.lines[index])
    }

    /// Lines whose id is greater than or equal to `id`.
    pub fn lines_from(&self, id: u64) -> &[TranscriptLine] {
        let start = self.lines.partition_point(|line| line.id < id);
        &self.lines[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let mut transcript = Transcript::new();
        let a = transcript.push(LineKind::Input, "help");
        let b = transcript.push(LineKind::Output, "Available commands");
        assert!(b > a);
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_clickable_line_carries_command() {
        let mut transcript = Transcript::new();
        let id = transcript.push_clickable(LineKind::Info, "  1  whoami", "whoami");
        let line = transcript.get(id).unwrap();
        assert!(line.clickable);
        assert_eq!(line.bound_command.as_deref(), Some("whoami"));

        let plain = transcript.push(LineKind::Output, "text");
        assert!(!transcript.get(plain).unwrap().clickable);
    }

    #[test]
    fn test_clear_keeps_id_counter() {
        let mut transcript = Transcript::new();
        transcript.push(LineKind::Output, "one");
        transcript.push(LineKind::Output, "two");
        transcript.clear();

        assert!(transcript.is_empty());
        assert_eq!(transcript.epoch(), 1);
        let id = transcript.push(LineKind::Output, "three");
        assert_eq!(id, 2);
    }

    #[test]
    fn test_lines_from() {
        let mut transcript = Transcript::new();
        transcript.push(LineKind::Output, "a");
        let second = transcript.push(LineKind::Output, "b");
        transcript.push(LineKind::Output, "c");

        let tail: Vec<&str> = transcript
            .lines_from(second)
            .iter()
            .map(|line| line.text.as_str())
            .collect();
        assert_eq!(tail, vec!["b", "c"]);
        assert!(transcript.lines_from(99).is_empty());
    }
}
