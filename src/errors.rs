//! Error types for the matching engine.
//!
//! Nothing here is fatal to the host process: an invalid pattern is an
//! ordinary user input error, and a budget abort still hands back whatever
//! was collected before the cutoff.

use crate::record::MatchRecord;
use thiserror::Error;

/// Errors that can occur while enumerating matches.
///
/// Subject text cannot cause an error (it has no syntax to validate);
/// only the pattern can be invalid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// The pattern failed to compile under the host pattern engine.
    /// The engine's own message is surfaced verbatim.
    #[error("invalid pattern syntax: {message}")]
    InvalidSyntax { message: String },

    /// Enumeration was aborted because the caller-supplied budget ran out.
    /// Carries the matches collected before the cutoff.
    #[error("match enumeration budget exceeded after {} match(es)", .partial.len())]
    BudgetExceeded { partial: Vec<MatchRecord> },
}

/// Result type for enumeration operations.
pub type PatternResult<T> = Result<T, PatternError>;
