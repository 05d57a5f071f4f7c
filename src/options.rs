//! Matching options supplied by the caller.

use serde::{Deserialize, Serialize};

/// Independent boolean toggles controlling one enumeration run.
///
/// Options are immutable for the duration of a run; nothing persists
/// between runs except the value the caller chooses to hold on to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternOptions {
    /// Find every match instead of stopping after the first.
    pub global: bool,
    /// Letters match regardless of case.
    pub case_insensitive: bool,
    /// `^` and `$` also match at line boundaries, not only string boundaries.
    pub multiline: bool,
    /// `.` also matches line-terminator characters.
    pub dot_all: bool,
    /// Character classes and word boundaries cover the full Unicode range
    /// instead of ASCII only. On by default; when disabled, the host engine
    /// rejects constructs whose ASCII form could split a UTF-8 sequence
    /// (`.`, `\W`, `\S`), surfacing them as invalid syntax.
    pub unicode_mode: bool,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            global: false,
            case_insensitive: false,
            multiline: false,
            dot_all: false,
            unicode_mode: true,
        }
    }
}

impl PatternOptions {
    /// First match only, case-sensitive, whole-string anchors, Unicode classes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }

    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    pub fn with_dot_all(mut self, dot_all: bool) -> Self {
        self.dot_all = dot_all;
        self
    }

    pub fn with_unicode_mode(mut self, unicode_mode: bool) -> Self {
        self.unicode_mode = unicode_mode;
        self
    }
}
