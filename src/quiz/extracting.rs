//! Field extraction
//!
//! Walks one record span and produces a [`Record`]. The walk is a small state
//! machine: the cursor starts on the title (unlabeled content before the
//! first recognized label), every label match closes the open field and opens
//! a new one, and end-of-span flushes whatever field is still open.
//!
//! Field text is the lines strictly between one label line and the next,
//! trimmed of leading and trailing blank lines; internal blank lines and code
//! indentation are preserved verbatim. Missing sections are missing from the
//! mapping, never an error.

use crate::quiz::labels::{match_label, LabelMatch};
use crate::quiz::record::{FieldRole, Record};
use crate::quiz::segmenting::{parse_ordinal, RecordSpan, SegmentedCorpus};
use std::fmt;

/// Used when no title can be derived from the span
const TITLE_FALLBACK: &str = "Unknown";

/// Errors produced while extracting one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The span does not start with a record boundary line. This violates the
    /// segmenter's contract and marks the record as unparseable; callers skip
    /// the record and continue.
    MissingBoundary { line: usize },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::MissingBoundary { line } => {
                write!(f, "span at line {} does not start with a record boundary", line + 1)
            }
        }
    }
}

impl std::error::Error for ExtractError {}

/// Where accumulated lines currently belong
enum Cursor {
    Title,
    Field(FieldRole),
}

/// Extract the record for one span of a segmented corpus
pub fn extract(corpus: &SegmentedCorpus, span: &RecordSpan) -> Result<Record, ExtractError> {
    let lines = corpus.span_lines(span);
    let (ordinal, header_rest) = lines
        .first()
        .and_then(|line| parse_ordinal(line))
        .ok_or(ExtractError::MissingBoundary { line: span.start })?;

    let header_title = clean_title(header_rest);

    let mut record = Record::new(ordinal, String::new());
    let mut cursor = Cursor::Title;
    let mut acc: Vec<String> = Vec::new();
    let mut title_fallback: Option<String> = None;

    for line in &lines[1..] {
        match match_label(line) {
            Some(matched) => {
                flush(&mut record, &cursor, &acc, &mut title_fallback);
                cursor = Cursor::Field(matched.role());
                acc.clear();
                if let LabelMatch::Inline(_, content) = matched {
                    acc.push(content.to_string());
                }
            }
            None => acc.push(line.trim_end().to_string()),
        }
    }
    flush(&mut record, &cursor, &acc, &mut title_fallback);

    record.title = if !header_title.is_empty() {
        header_title
    } else {
        title_fallback.unwrap_or_else(|| TITLE_FALLBACK.to_string())
    };

    Ok(record)
}

/// Close out the open field: store the accumulated body, or remember the
/// first unlabeled line as a title fallback.
fn flush(record: &mut Record, cursor: &Cursor, acc: &[String], title_fallback: &mut Option<String>) {
    match cursor {
        Cursor::Title => {
            if title_fallback.is_none() {
                if let Some(line) = acc.iter().find(|l| !l.trim().is_empty()) {
                    *title_fallback = Some(line.trim().to_string());
                }
            }
        }
        Cursor::Field(role) => {
            record.fields.insert(*role, collect_body(acc));
        }
    }
}

/// Join accumulated lines, dropping leading and trailing blank lines while
/// keeping everything in between verbatim.
fn collect_body(acc: &[String]) -> String {
    let Some(start) = acc.iter().position(|l| !l.trim().is_empty()) else {
        return String::new();
    };
    let end = acc.iter().rposition(|l| !l.trim().is_empty()).unwrap();
    acc[start..=end].join("\n")
}

/// Title text from the boundary-line remainder: strip the separating dash or
/// colon and surrounding whitespace.
fn clean_title(rest: &str) -> String {
    rest.trim_start_matches([' ', '\t', '—', '–', '-', ':'])
        .trim_end()
        .to_string()
}
