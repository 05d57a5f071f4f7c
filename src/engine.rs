//! The seam between the enumerator and the host pattern engine.
//!
//! The enumerator only needs one capability: "find the next match at or
//! after this position". Putting that behind [`PatternEngine`] keeps the
//! termination logic independent of the concrete backend, and lets tests
//! drive the loop with a scripted engine instead of a pathological pattern.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::errors::{PatternError, PatternResult};
use crate::options::PatternOptions;

/// A single match as reported by a backend: the overall span plus one
/// entry per capturing group defined in the pattern, in declaration order.
/// A group that did not participate is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineMatch {
    pub range: Range<usize>,
    pub groups: Vec<Option<Range<usize>>>,
}

/// A compiled pattern that can be searched from an arbitrary start offset.
///
/// `start` is a byte offset on a `char` boundary, `start <= subject.len()`.
/// Anchors keep their whole-subject meaning: searching from `start` is not
/// the same as searching a suffix slice, since `^` must still refer to the
/// real beginning of the subject.
pub trait PatternEngine {
    fn find_from(&self, subject: &str, start: usize) -> Option<EngineMatch>;
}

/// The `regex`-crate backend.
#[derive(Debug)]
pub struct RegexEngine {
    regex: Regex,
}

impl RegexEngine {
    /// Compile `pattern` with the given options.
    ///
    /// A malformed pattern is an ordinary input error, surfaced as
    /// [`PatternError::InvalidSyntax`] with the engine's message verbatim.
    pub fn compile(pattern: &str, options: &PatternOptions) -> PatternResult<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(options.case_insensitive)
            .multi_line(options.multiline)
            .dot_matches_new_line(options.dot_all)
            .unicode(options.unicode_mode)
            .build()
            .map_err(|err| PatternError::InvalidSyntax {
                message: err.to_string(),
            })?;
        Ok(Self { regex })
    }

    /// Number of capturing groups defined in the pattern.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }
}

impl PatternEngine for RegexEngine {
    fn find_from(&self, subject: &str, start: usize) -> Option<EngineMatch> {
        // captures_read_at searches the full haystack from `start`, so all
        // reported offsets are relative to the original subject and group
        // participation is preserved (a non-participating group has no slot).
        let mut locations = self.regex.capture_locations();
        let overall = self.regex.captures_read_at(&mut locations, subject, start)?;
        let groups = (1..locations.len())
            .map(|i| locations.get(i).map(|(s, e)| s..e))
            .collect();
        Some(EngineMatch {
            range: overall.start()..overall.end(),
            groups,
        })
    }
}
