//! The per-match data shape produced by enumeration.

use serde::{Deserialize, Serialize};

/// One match of a pattern against the subject string.
///
/// Offsets are byte offsets into the *original, unmodified* subject and
/// always fall on `char` boundaries, so `&subject[record.start..record.end()]`
/// is valid and equals `matched_text`. Records produced by one enumeration
/// are sorted by `start` and never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// The substring consumed by the whole pattern for this match.
    pub matched_text: String,
    /// Byte offset of the match in the original subject.
    pub start: usize,
    /// One entry per capturing group *defined in the pattern*, in declaration
    /// order. `None` means the group did not participate in this match, which
    /// is a distinct state from matching the empty string (`Some("")`).
    pub captured_groups: Vec<Option<String>>,
}

impl MatchRecord {
    pub fn new(matched_text: impl Into<String>, start: usize) -> Self {
        Self {
            matched_text: matched_text.into(),
            start,
            captured_groups: Vec::new(),
        }
    }

    /// Set the captured groups.
    pub fn with_groups(mut self, captured_groups: Vec<Option<String>>) -> Self {
        self.captured_groups = captured_groups;
        self
    }

    /// Byte offset one past the end of the match.
    pub fn end(&self) -> usize {
        self.start + self.matched_text.len()
    }

    /// Returns true for a zero-width match (the pattern consumed nothing).
    pub fn is_zero_width(&self) -> bool {
        self.matched_text.is_empty()
    }

    /// Start offset counted in code points rather than bytes.
    ///
    /// For consumers that index the subject as a sequence of code points
    /// (the unit `unicode_mode` implies). `subject` must be the string this
    /// record was produced from.
    pub fn start_chars(&self, subject: &str) -> usize {
        subject[..self.start].chars().count()
    }

    /// End offset counted in code points rather than bytes.
    pub fn end_chars(&self, subject: &str) -> usize {
        self.start_chars(subject) + self.matched_text.chars().count()
    }
}
