//! Advisory description of pattern constructs.
//!
//! Best-effort presence checks against a fixed table, for display next to a
//! pattern input. Output order follows the table, not the pattern. This is
//! advisory text only; the checks are textual and can misfire on escaped or
//! quoted metacharacters (a `?` inside `(?:` reads as "optional"), which is
//! acceptable for its purpose.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `{n}`, `{n,}` and `{n,m}` counted repetitions.
static COUNTED_REPETITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\d+(?:,\d*)?\}").expect("counted repetition pattern is valid"));

enum Check {
    Literal(&'static str),
    Either(&'static str, &'static str),
    CountedRepetition,
}

const CONSTRUCTS: &[(Check, &str)] = &[
    (Check::Literal(r"\d"), r"\d matches any digit"),
    (Check::Literal(r"\w"), r"\w matches any word character"),
    (Check::Literal(r"\s"), r"\s matches any whitespace"),
    (Check::Literal(r"\b"), r"\b matches at a word boundary"),
    (
        Check::Either("a-z", "A-Z"),
        "a-z / A-Z matches a letter range",
    ),
    (Check::Literal("["), "[...] matches one character from a set"),
    (Check::Literal("^"), "^ anchors to the start"),
    (Check::Literal("$"), "$ anchors to the end"),
    (Check::Literal("*"), "* repeats zero or more times"),
    (Check::Literal("+"), "+ repeats one or more times"),
    (Check::Literal("?"), "? makes the preceding element optional"),
    (Check::CountedRepetition, "{n,m} repeats a counted number of times"),
    (Check::Literal("|"), "| separates alternatives"),
    (Check::Literal("("), "(...) groups and captures"),
];

/// Report which recognized constructs appear in `pattern`, in table order.
///
/// Cannot fail; an empty or unrecognized pattern yields an empty list.
pub fn describe(pattern: &str) -> Vec<String> {
    CONSTRUCTS
        .iter()
        .filter(|(check, _)| match check {
            Check::Literal(needle) => pattern.contains(*needle),
            Check::Either(first, second) => pattern.contains(*first) || pattern.contains(*second),
            Check::CountedRepetition => COUNTED_REPETITION.is_match(pattern),
        })
        .map(|(_, description)| (*description).to_string())
        .collect()
}
