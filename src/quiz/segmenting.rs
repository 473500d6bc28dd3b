//! Record segmentation
//!
//! Splits a raw quiz corpus into per-record spans. A record boundary is a
//! line that starts with a record-index token, possibly decorated with
//! non-alphanumeric ornamentation ("🔹 Q3 — ..."), and is followed — possibly
//! after blank lines — by a recognized field label line, another boundary, or
//! end-of-document.
//!
//! Recognized index tokens:
//! - `Q` + digits ("Q1", "Q12")
//! - keycap numerals ("1️⃣", "1️⃣0️⃣", "🔟")
//! - plain digits with a trailing separator ("3.", "3)", "3 —")
//!
//! Spans are contiguous and exhaustive: every line from the first boundary to
//! the end of the document belongs to exactly one span. Content before the
//! first boundary is preamble and is discarded.

use crate::quiz::labels::match_label;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// `Q`-prefixed ordinal at line start ("Q1 — Title")
static Q_ORDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Q(\d+)").unwrap());

/// Plain numeric ordinal with a separator ("3. Title", "3) Title", "3 — Title")
static PLAIN_ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s*[—–\-.):](?:\s+|$)").unwrap());

/// How many characters of the document start to quote in diagnostics
const EXCERPT_LEN: usize = 500;

/// Errors produced while segmenting a corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// Zero record boundaries were detected. Carries an excerpt of the
    /// document start so the failure is diagnosable without the input file.
    NoBoundariesFound { excerpt: String },
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentError::NoBoundariesFound { excerpt } => {
                writeln!(f, "no record boundaries found in document")?;
                writeln!(f, "document starts with:")?;
                write!(f, "{}", excerpt)
            }
        }
    }
}

impl std::error::Error for SegmentError {}

/// One record's span, as line indices into the segmented corpus.
///
/// `start` is the boundary line itself; `end` is exclusive and equals the
/// next span's `start` (or the line count for the last span).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSpan {
    pub ordinal: u32,
    pub start: usize,
    pub end: usize,
}

/// A corpus split into record spans
#[derive(Debug, Clone)]
pub struct SegmentedCorpus {
    lines: Vec<String>,
    spans: Vec<RecordSpan>,
}

impl SegmentedCorpus {
    /// Segment a document into record spans.
    ///
    /// Returns [`SegmentError::NoBoundariesFound`] when no boundary line is
    /// detected; a caller must not treat that as an empty result.
    pub fn segment(source: &str) -> Result<Self, SegmentError> {
        let lines: Vec<String> = source.lines().map(String::from).collect();

        let starts: Vec<(usize, u32)> = lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| {
                let (ordinal, _) = parse_ordinal(line)?;
                confirmed_boundary(&lines, i).then_some((i, ordinal))
            })
            .collect();

        if starts.is_empty() {
            return Err(SegmentError::NoBoundariesFound {
                excerpt: source.chars().take(EXCERPT_LEN).collect(),
            });
        }

        let spans = starts
            .iter()
            .enumerate()
            .map(|(idx, &(start, ordinal))| {
                let end = starts
                    .get(idx + 1)
                    .map(|&(next, _)| next)
                    .unwrap_or(lines.len());
                RecordSpan {
                    ordinal,
                    start,
                    end,
                }
            })
            .collect();

        Ok(SegmentedCorpus { lines, spans })
    }

    pub fn spans(&self) -> &[RecordSpan] {
        &self.spans
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The lines of one span, boundary line included
    pub fn span_lines(&self, span: &RecordSpan) -> &[String] {
        &self.lines[span.start..span.end]
    }

    /// The span's text, reassembled with newlines (used by tests and
    /// diagnostics)
    pub fn span_text(&self, span: &RecordSpan) -> String {
        self.span_lines(span).join("\n")
    }
}

/// Parse a record-index token at the start of a line.
///
/// Leading ornamentation (any non-alphanumeric decoration) is stripped before
/// the comparison. Returns the ordinal and the remainder of the line (the
/// title portion, still untrimmed).
pub fn parse_ordinal(line: &str) -> Option<(u32, &str)> {
    let stripped = strip_ornament(line.trim());

    if let Some(caps) = Q_ORDINAL.captures(stripped) {
        let ordinal: u32 = caps[1].parse().ok()?;
        let rest = &stripped[caps.get(0).unwrap().end()..];
        if starts_non_alphanumeric(rest) {
            return Some((ordinal, rest));
        }
        return None;
    }

    if let Some((ordinal, rest)) = parse_keycap(stripped) {
        if starts_non_alphanumeric(rest) {
            return Some((ordinal, rest));
        }
        return None;
    }

    if let Some(caps) = PLAIN_ORDINAL.captures(stripped) {
        let ordinal: u32 = caps[1].parse().ok()?;
        return Some((ordinal, &stripped[caps.get(0).unwrap().end()..]));
    }

    None
}

/// Strip decorative marks before the index token ("🔹 ", "— ", ...)
fn strip_ornament(line: &str) -> &str {
    line.trim_start_matches(|c: char| !c.is_ascii_alphanumeric() && c != '🔟')
}

fn starts_non_alphanumeric(rest: &str) -> bool {
    rest.chars().next().map_or(true, |c| !c.is_alphanumeric())
}

/// Parse a keycap-numeral ordinal: digits carrying U+FE0F/U+20E3 markers, or
/// 🔟 for ten. "1️⃣0️⃣" reads as the digit string "10".
fn parse_keycap(s: &str) -> Option<(u32, &str)> {
    let mut digits = String::new();
    let mut keycap_seen = false;
    let mut rest = s;

    loop {
        if let Some(r) = rest.strip_prefix('🔟') {
            digits.push_str("10");
            keycap_seen = true;
            rest = r;
            continue;
        }
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_ascii_digit() => {
                let mut r = chars.as_str();
                if let Some(r2) = r.strip_prefix('\u{fe0f}') {
                    r = r2;
                    keycap_seen = true;
                }
                if let Some(r2) = r.strip_prefix('\u{20e3}') {
                    r = r2;
                    keycap_seen = true;
                }
                digits.push(c);
                rest = r;
            }
            _ => break,
        }
    }

    if !keycap_seen || digits.is_empty() {
        return None;
    }
    let ordinal: u32 = digits.parse().ok()?;
    Some((ordinal, rest))
}

/// A candidate boundary is confirmed when the next non-blank line is a
/// recognized label, another boundary candidate (an empty record is legal),
/// or there is no next non-blank line at all.
fn confirmed_boundary(lines: &[String], index: usize) -> bool {
    for line in &lines[index + 1..] {
        if line.trim().is_empty() {
            continue;
        }
        return match_label(line).is_some() || parse_ordinal(line).is_some();
    }
    true
}
