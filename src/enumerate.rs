//! Match enumeration: the explicit-cursor search loop.
//!
//! The host engine is stateless between calls; the search position lives in
//! a local `cursor` threaded through the loop, which keeps the zero-width
//! advance auditable and the loop testable against any [`PatternEngine`].

use crate::engine::{EngineMatch, PatternEngine, RegexEngine};
use crate::errors::{PatternError, PatternResult};
use crate::options::PatternOptions;
use crate::record::MatchRecord;

/// Caller-supplied cap on enumeration work.
///
/// Counts host-engine searches, not matches: a run that finds nothing still
/// spends one step per search. The default is unlimited, which is safe for
/// any pattern because the loop itself terminates within `len + 1` searches;
/// the budget exists to bound patterns whose *individual* searches are
/// expensive (heavy nested quantifiers against a long subject).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Budget {
    max_searches: Option<usize>,
}

impl Budget {
    /// No cap beyond the loop's own termination bound.
    pub fn unlimited() -> Self {
        Self { max_searches: None }
    }

    /// Abort after `max_searches` host-engine searches.
    pub fn searches(max_searches: usize) -> Self {
        Self {
            max_searches: Some(max_searches),
        }
    }

    fn permits(&self, used: usize) -> bool {
        match self.max_searches {
            Some(max) => used < max,
            None => true,
        }
    }
}

/// Enumerate matches of `pattern` over `subject`.
///
/// With `options.global` set, returns every non-overlapping match in
/// left-to-right order; otherwise at most one record. A pattern that fails
/// to compile yields [`PatternError::InvalidSyntax`]; subject text cannot
/// cause an error.
pub fn enumerate(
    pattern: &str,
    options: &PatternOptions,
    subject: &str,
) -> PatternResult<Vec<MatchRecord>> {
    enumerate_with_budget(pattern, options, subject, Budget::unlimited())
}

/// Like [`enumerate`], but aborts with [`PatternError::BudgetExceeded`]
/// (carrying the partial match list) once `budget` runs out.
pub fn enumerate_with_budget(
    pattern: &str,
    options: &PatternOptions,
    subject: &str,
    budget: Budget,
) -> PatternResult<Vec<MatchRecord>> {
    let engine = RegexEngine::compile(pattern, options)?;
    enumerate_engine(&engine, options, subject, budget)
}

/// The enumeration loop over an already-compiled engine.
///
/// Policy, per search: find the next match at or after `cursor`; none stops
/// the loop. A found match is recorded and `cursor` moves to its end. If the
/// match was zero-width, `cursor` advances one further code point so the next
/// search cannot rediscover the same empty match; if that advance would move
/// past the end of the subject, the loop stops. Every iteration moves the
/// cursor forward, so the loop runs at most `subject.len() + 1` searches.
pub fn enumerate_engine<E: PatternEngine>(
    engine: &E,
    options: &PatternOptions,
    subject: &str,
    budget: Budget,
) -> PatternResult<Vec<MatchRecord>> {
    let mut records = Vec::new();
    let mut cursor = 0usize;
    let mut searches = 0usize;

    loop {
        if !budget.permits(searches) {
            return Err(PatternError::BudgetExceeded { partial: records });
        }
        searches += 1;

        let found = match engine.find_from(subject, cursor) {
            Some(found) => found,
            None => break,
        };
        let zero_width = found.range.is_empty();
        cursor = found.range.end;
        records.push(to_record(&found, subject));

        if !options.global {
            break;
        }
        if zero_width {
            match next_code_point(subject, cursor) {
                Some(advanced) => cursor = advanced,
                None => break,
            }
        }
    }

    Ok(records)
}

fn to_record(found: &EngineMatch, subject: &str) -> MatchRecord {
    let groups = found
        .groups
        .iter()
        .map(|group| group.clone().map(|range| subject[range].to_string()))
        .collect();
    MatchRecord::new(&subject[found.range.clone()], found.range.start).with_groups(groups)
}

/// Byte offset one code point past `pos`, or `None` at end of subject.
fn next_code_point(subject: &str, pos: usize) -> Option<usize> {
    subject[pos..].chars().next().map(|ch| pos + ch.len_utf8())
}
