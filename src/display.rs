//! Terminal-friendly rendering of matches beneath the subject line.

use std::fmt::Write as _;
use unicode_width::UnicodeWidthStr;

use crate::record::MatchRecord;

// a1 bb22 c3
//  ╰ "1"
//     ╰╯ "22"
//          ╰ "3"
//
// call 555-1234 now
//      ╰──────╯ "555-1234" ("555", "1234")
/// Renders the subject with a `╰──╯` underline and a label line per match.
///
/// Alignment uses display width, so multibyte and wide characters line up.
/// A zero-width match renders as a lone `╰` at its position. Intended for
/// single-line subjects; a subject containing newlines will still render,
/// but the underlines only align for the text after the last newline.
pub struct MatchDisplay<'a> {
    subject: &'a str,
    records: &'a [MatchRecord],
}

impl<'a> MatchDisplay<'a> {
    pub fn new(subject: &'a str, records: &'a [MatchRecord]) -> Self {
        MatchDisplay { subject, records }
    }
}

impl<'a> std::fmt::Display for MatchDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.subject)?;

        for record in self.records {
            f.write_char('\n')?;

            let start_col = UnicodeWidthStr::width(&self.subject[..record.start]);
            let end_col = start_col + UnicodeWidthStr::width(record.matched_text.as_str());
            for _ in 0..start_col {
                f.write_char(' ')?;
            }
            f.write_char('╰')?;
            for _ in (start_col + 1)..end_col.saturating_sub(1) {
                f.write_char('─')?;
            }
            if end_col - start_col > 1 {
                f.write_char('╯')?;
            }

            write!(f, " {:?}", record.matched_text)?;
            if !record.captured_groups.is_empty() {
                f.write_str(" (")?;
                for (i, group) in record.captured_groups.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match group {
                        Some(text) => write!(f, "{:?}", text)?,
                        None => f.write_char('_')?,
                    }
                }
                f.write_char(')')?;
            }
        }

        Ok(())
    }
}
