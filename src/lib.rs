//! Pattern-match enumeration and annotated highlighting.
//!
//! `matchlight` is the engine behind "test a pattern against text" tools:
//! it drives a host pattern engine (the `regex` crate) across a subject
//! string, collects every non-overlapping match with its captured groups,
//! and produces an annotated copy of the subject with markers around each
//! span. Matching itself is delegated to the host engine; this crate owns
//! the iteration policy (including the zero-width-match termination guard),
//! capture normalization, and offset-safe marker insertion.
//!
//! ## Modules
//!
//! - [`enumerate`](mod@enumerate) - The search loop and its [`Budget`]
//! - [`annotate`](mod@annotate) - Marker insertion and stripping
//! - [`advisor`] - Advisory description of pattern constructs
//! - [`engine`] - The [`PatternEngine`] seam and the `regex` backend
//! - [`record`] - The per-match [`MatchRecord`] shape
//! - [`options`] - [`PatternOptions`] toggles
//! - [`errors`] - [`PatternError`] and [`PatternResult`]
//! - [`display`] - Terminal-friendly [`MatchDisplay`]
//!
//! All calls are pure functions over explicit inputs: no hidden globals, no
//! logging, no persisted state. Concurrent callers need no coordination.
//!
//! ```
//! use matchlight::{annotate, enumerate, PatternOptions};
//!
//! let options = PatternOptions::new().with_global(true);
//! let matches = enumerate(r"\d+", &options, "a1 bb22 c3").unwrap();
//! assert_eq!(matches.len(), 3);
//! assert_eq!(annotate("a1 bb22 c3", &matches, "[", "]"), "a[1] bb[22] c[3]");
//! ```

pub mod advisor;
pub mod annotate;
pub mod display;
pub mod engine;
pub mod enumerate;
pub mod errors;
pub mod options;
pub mod record;

// Re-exports for convenient access to core types
pub use advisor::describe;
pub use annotate::{annotate, annotate_markup, strip_markers};
pub use display::MatchDisplay;
pub use engine::{EngineMatch, PatternEngine, RegexEngine};
pub use enumerate::{enumerate, enumerate_engine, enumerate_with_budget, Budget};
pub use errors::{PatternError, PatternResult};
pub use options::PatternOptions;
pub use record::MatchRecord;
