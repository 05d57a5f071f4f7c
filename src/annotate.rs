//! Marker insertion around match spans.
//!
//! The output is built in a single linear pass over the *original* subject:
//! the gap since the previous match end, the opening marker, the matched
//! slice, the closing marker. Marker lengths are never added to any offset
//! used to index the subject, so later matches cannot be shifted by earlier
//! insertions.

use unicode_segmentation::UnicodeSegmentation;

use crate::record::MatchRecord;

#[derive(Clone, Copy)]
enum Escape {
    None,
    Markup,
}

/// Wrap every match span in `marker_open` / `marker_close`.
///
/// Matched text is inserted verbatim, so stripping the marker tokens from the
/// result reproduces the subject exactly (see [`strip_markers`]). For output
/// that is later rendered as markup, use [`annotate_markup`] instead.
///
/// Records are expected sorted by start and non-overlapping, as enumeration
/// produces them; out-of-order or overlapping input is sorted and the
/// overlapping spans dropped rather than corrupting the output. Insertion
/// points are widened outward to grapheme-cluster boundaries, so a marker
/// never separates a base character from its combining marks.
pub fn annotate(
    subject: &str,
    matches: &[MatchRecord],
    marker_open: &str,
    marker_close: &str,
) -> String {
    render(subject, matches, marker_open, marker_close, Escape::None)
}

/// Like [`annotate`], but escapes `&`, `<` and `>` in the subject text
/// (matched and unmatched alike) so the highlighted text cannot alter the
/// structure of rendered markup. Escaping happens *before* wrapping; the
/// marker strings themselves are emitted verbatim.
pub fn annotate_markup(
    subject: &str,
    matches: &[MatchRecord],
    marker_open: &str,
    marker_close: &str,
) -> String {
    render(subject, matches, marker_open, marker_close, Escape::Markup)
}

/// Remove every occurrence of the marker tokens, recovering the subject
/// [`annotate`] was given.
pub fn strip_markers(annotated: &str, marker_open: &str, marker_close: &str) -> String {
    annotated.replace(marker_open, "").replace(marker_close, "")
}

fn render(
    subject: &str,
    matches: &[MatchRecord],
    marker_open: &str,
    marker_close: &str,
    escape: Escape,
) -> String {
    let mut ordered: Vec<&MatchRecord> = matches.iter().collect();
    ordered.sort_by_key(|record| record.start);

    let boundaries = grapheme_boundaries(subject);
    let mut out = String::with_capacity(subject.len() + matches.len() * 8);
    let mut prev_end = 0usize;

    for record in ordered {
        if record.start < prev_end || record.end() > subject.len() {
            // Overlapping or out-of-range record: drop it, keep the text.
            continue;
        }
        let start = snap_back(&boundaries, record.start).max(prev_end);
        let end = snap_forward(&boundaries, record.end()).max(start);

        push_escaped(&mut out, &subject[prev_end..start], escape);
        out.push_str(marker_open);
        push_escaped(&mut out, &subject[start..end], escape);
        out.push_str(marker_close);
        prev_end = end;
    }
    push_escaped(&mut out, &subject[prev_end..], escape);
    out
}

fn push_escaped(out: &mut String, text: &str, escape: Escape) {
    match escape {
        Escape::None => out.push_str(text),
        Escape::Markup => {
            for ch in text.chars() {
                match ch {
                    '&' => out.push_str("&amp;"),
                    '<' => out.push_str("&lt;"),
                    '>' => out.push_str("&gt;"),
                    other => out.push(other),
                }
            }
        }
    }
}

/// Sorted byte offsets of every grapheme-cluster boundary, including
/// `subject.len()`.
fn grapheme_boundaries(subject: &str) -> Vec<usize> {
    subject
        .grapheme_indices(true)
        .map(|(offset, _)| offset)
        .chain(std::iter::once(subject.len()))
        .collect()
}

fn snap_back(boundaries: &[usize], pos: usize) -> usize {
    match boundaries.binary_search(&pos) {
        Ok(_) => pos,
        Err(insertion) => boundaries[insertion - 1],
    }
}

fn snap_forward(boundaries: &[usize], pos: usize) -> usize {
    match boundaries.binary_search(&pos) {
        Ok(_) => pos,
        Err(insertion) => boundaries[insertion],
    }
}
