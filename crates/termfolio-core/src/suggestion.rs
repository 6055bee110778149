//! Prefix completion and typo correction over registry command names.
//!
//! Both operations are pure functions of their input and the name list, so
//! identical input always yields identical ordered output.

use crate::command::CommandRegistry;

/// Maximum candidates returned by [`SuggestionEngine::live_complete`].
pub const LIVE_COMPLETION_LIMIT: usize = 5;
/// Maximum candidates returned by [`SuggestionEngine::correct`].
pub const CORRECTION_LIMIT: usize = 3;
/// Largest edit distance still offered as a correction.
pub const MAX_CORRECTION_DISTANCE: usize = 2;

/// Suggestion source built from the registry's primary names (aliases excluded).
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    names: Vec<String>,
}

impl SuggestionEngine {
    /// Creates an engine over `names`, kept in the given order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_registry(registry: &CommandRegistry) -> Self {
        Self::new(registry.names())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Names starting with `partial` (case-insensitive), in registry order.
    ///
    /// Blank input yields no candidates.
    pub fn live_complete(&self, partial: &str) -> Vec<String> {
        if partial.trim().is_empty() {
            return Vec::new();
        }
        let partial = partial.to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&partial))
            .take(LIVE_COMPLETION_LIMIT)
            .cloned()
            .collect()
    }

    /// "Did you mean" candidates for a command that failed exact dispatch.
    ///
    /// Names that contain `unknown` as an ordered subsequence are scored by
    /// [`subsequence_score`]; the rest fall back to edit distance, accepted
    /// when within [`MAX_CORRECTION_DISTANCE`] and scored `10 - distance`.
    /// Ties keep registry order.
    pub fn correct(&self, unknown: &str) -> Vec<String> {
        let unknown = unknown.trim().to_lowercase();
        if unknown.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(u32, &String)> = self
            .names
            .iter()
            .filter_map(|name| {
                let candidate = name.to_lowercase();
                if let Some(score) = subsequence_score(&unknown, &candidate) {
                    return Some((score, name));
                }
                let distance = edit_distance(&unknown, &candidate);
                (1..=MAX_CORRECTION_DISTANCE)
                    .contains(&distance)
                    .then(|| (10 - distance as u32, name))
            })
            .collect();

        // Stable sort, so equal scores stay in registry order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .take(CORRECTION_LIMIT)
            .map(|(_, name)| name.clone())
            .collect()
    }
}

/// Scores `candidate` if every character of `pattern` appears in it in order.
///
/// Each matched character contributes `1 + bonus`; the bonus grows by 2 after
/// every consecutive hit and resets on a miss. Returns `None` unless the whole
/// pattern is consumed.
pub fn subsequence_score(pattern: &str, candidate: &str) -> Option<u32> {
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() {
        return None;
    }

    let mut matched = 0;
    let mut score = 0;
    let mut bonus = 0;
    for ch in candidate.chars() {
        if matched == pattern.len() {
            break;
        }
        if ch == pattern[matched] {
            score += 1 + bonus;
            bonus += 2;
            matched += 1;
        } else {
            bonus = 0;
        }
    }

    (matched == pattern.len()).then_some(score)
}

/// Levenshtein distance (insert, delete, substitute; cost 1 each).
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SuggestionEngine {
        SuggestionEngine::new([
            "help", "whoami", "about", "skills", "projects", "social", "skip", "contact",
            "clear", "chat",
        ])
    }

    #[test]
    fn test_subsequence_score_consecutive_bonus() {
        // 1 + 3 + 5 + 7 + 9
        assert_eq!(subsequence_score("whoam", "whoami"), Some(25));
        // s(1) k(3), miss resets, i(1) l(3) l(5)
        assert_eq!(subsequence_score("skill", "skxill"), Some(13));
        assert_eq!(subsequence_score("hlep", "help"), None);
        assert_eq!(subsequence_score("", "help"), None);
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("help", "help"), 0);
        assert_eq!(edit_distance("hlep", "help"), 2);
        assert_eq!(edit_distance("abuot", "about"), 2);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_live_complete_prefix_in_registry_order() {
        let engine = engine();
        assert_eq!(engine.live_complete("s"), vec!["skills", "social", "skip"]);
        assert_eq!(engine.live_complete("SK"), vec!["skills", "skip"]);
        assert_eq!(engine.live_complete("c"), vec!["contact", "clear", "chat"]);
        assert!(engine.live_complete("").is_empty());
        assert!(engine.live_complete("zzz").is_empty());
    }

    #[test]
    fn test_live_complete_caps_at_limit() {
        let engine = SuggestionEngine::new(["aa", "ab", "ac", "ad", "ae", "af", "ag"]);
        let candidates = engine.live_complete("a");
        assert_eq!(candidates.len(), LIVE_COMPLETION_LIMIT);
        assert_eq!(candidates, vec!["aa", "ab", "ac", "ad", "ae"]);
    }

    #[test]
    fn test_live_complete_is_idempotent() {
        let engine = engine();
        assert_eq!(engine.live_complete("c"), engine.live_complete("c"));
    }

    #[test]
    fn test_correct_typo_prefers_subsequence() {
        let engine = engine();
        let candidates = engine.correct("whoam");
        assert_eq!(candidates.first().map(String::as_str), Some("whoami"));
    }

    #[test]
    fn test_correct_falls_back_to_edit_distance() {
        let engine = engine();
        assert!(engine.correct("hlep").contains(&"help".to_string()));
        assert!(engine.correct("abuot").contains(&"about".to_string()));
    }

    #[test]
    fn test_correct_rejects_distant_input() {
        let engine = engine();
        assert!(engine.correct("xyzzyq").is_empty());
        assert!(engine.correct("   ").is_empty());
    }

    #[test]
    fn test_correct_returns_at_most_three() {
        let engine = engine();
        assert!(engine.correct("s").len() <= CORRECTION_LIMIT);
    }

    #[test]
    fn test_correct_is_deterministic() {
        let engine = engine();
        assert_eq!(engine.correct("prjects"), engine.correct("prjects"));
        assert_eq!(engine.correct("prjects")[0], "projects");
    }
}
