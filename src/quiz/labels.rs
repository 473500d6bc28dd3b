//! Recognized field labels and the label-matching rule
//!
//! Corpus blocks mark their sections with a small fixed set of headings
//! ("Broken Code", "Correct Code", "Riddle", ...). A trimmed line is treated
//! as a label line only when it *starts* with a known label and is not simply
//! body text that happens to mention the label name mid-sentence.
//!
//! The matching rule, applied to the trimmed line:
//!
//! 1. Long-form labels (e.g. "Hidden Test Cases (Logic-validated)") match
//!    exactly, nothing else.
//! 2. Otherwise the line must extend past the label by at most
//!    [`LABEL_SLACK`] characters, none of them alphanumeric. This accepts
//!    "Riddle:" and "Error —" but rejects "Answers" and prose.
//! 3. Or the label is followed by a colon and same-line content: the
//!    remainder after the colon is the field's first content line
//!    ("Riddle: Why accept input if you ignore it?").

use crate::quiz::record::FieldRole;

/// Maximum trailing decoration after a block label (":", " —", ...)
pub const LABEL_SLACK: usize = 5;

/// How strictly a label's text must match the candidate line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The trimmed line must equal the label text
    Exact,
    /// Label at line start, plus slack or inline content after a colon
    Prefix,
}

/// One recognized section heading
#[derive(Debug, Clone, Copy)]
pub struct Label {
    pub text: &'static str,
    pub role: FieldRole,
    pub mode: MatchMode,
}

/// The fixed label table. Spelling variants map to the same role.
pub const LABELS: &[Label] = &[
    Label {
        text: "Question",
        role: FieldRole::Question,
        mode: MatchMode::Prefix,
    },
    Label {
        text: "Broken Code",
        role: FieldRole::BrokenCode,
        mode: MatchMode::Prefix,
    },
    Label {
        text: "Error",
        role: FieldRole::Error,
        mode: MatchMode::Prefix,
    },
    Label {
        text: "Issue",
        role: FieldRole::Error,
        mode: MatchMode::Prefix,
    },
    Label {
        text: "Correct Code",
        role: FieldRole::CorrectCode,
        mode: MatchMode::Prefix,
    },
    Label {
        text: "Riddle",
        role: FieldRole::Riddle,
        mode: MatchMode::Prefix,
    },
    Label {
        text: "Answer",
        role: FieldRole::Answer,
        mode: MatchMode::Prefix,
    },
    Label {
        text: "Logic Rule",
        role: FieldRole::LogicRule,
        mode: MatchMode::Prefix,
    },
    Label {
        text: "Hidden Test Cases (Logic-validated)",
        role: FieldRole::HiddenTests,
        mode: MatchMode::Exact,
    },
    Label {
        text: "Regex / Token Rules",
        role: FieldRole::TokenRules,
        mode: MatchMode::Prefix,
    },
];

/// Result of matching one line against the label table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMatch<'a> {
    /// Heading on its own line; field content starts on the next line
    Block(FieldRole),
    /// Heading with same-line content after a colon
    Inline(FieldRole, &'a str),
}

impl LabelMatch<'_> {
    pub fn role(&self) -> FieldRole {
        match self {
            LabelMatch::Block(role) => *role,
            LabelMatch::Inline(role, _) => *role,
        }
    }
}

/// Match a raw line against the recognized labels.
///
/// Returns `None` for body text, including lines that merely contain a label
/// name somewhere past the start.
pub fn match_label(line: &str) -> Option<LabelMatch<'_>> {
    let trimmed = line.trim();
    for label in LABELS {
        if !trimmed.starts_with(label.text) {
            continue;
        }
        let rest = &trimmed[label.text.len()..];

        match label.mode {
            MatchMode::Exact => {
                if rest.is_empty() {
                    return Some(LabelMatch::Block(label.role));
                }
            }
            MatchMode::Prefix => {
                // Block form: short non-alphanumeric decoration only.
                if rest.chars().count() <= LABEL_SLACK
                    && !rest.chars().any(|c| c.is_alphanumeric())
                {
                    return Some(LabelMatch::Block(label.role));
                }
                // Inline form: "Label: content on the same line".
                if let Some(inline) = rest.strip_prefix(':') {
                    let inline = inline.trim();
                    if !inline.is_empty() {
                        return Some(LabelMatch::Inline(label.role, inline));
                    }
                }
            }
        }
    }
    None
}
