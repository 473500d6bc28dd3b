//! Record data model
//!
//! A `Record` is one quiz entry recovered from the raw corpus: an ordinal
//! identifier, a title, and a mapping from field role to extracted text.
//! Fields that were absent from the source block are simply absent from the
//! mapping; consumers decide whether a default applies at emit time.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// The role a labeled section plays inside a quiz record.
///
/// Roles are fixed: they correspond to the recognized section headings of the
/// corpus format, after merging spelling variants ("Error" and "Issue" are
/// the same role).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldRole {
    /// The prompt shown to the player ("Question")
    Question,
    /// The code the player must repair ("Broken Code")
    BrokenCode,
    /// What is wrong with the broken code ("Error" / "Issue")
    Error,
    /// The repaired code ("Correct Code")
    CorrectCode,
    /// The hint riddle ("Riddle")
    Riddle,
    /// The short answer ("Answer")
    Answer,
    /// The underlying concept ("Logic Rule")
    LogicRule,
    /// Hidden validation cases ("Hidden Test Cases (Logic-validated)")
    HiddenTests,
    /// Expected answer patterns, one per line ("Regex / Token Rules")
    TokenRules,
}

impl FieldRole {
    /// Stable lowerCamelCase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldRole::Question => "question",
            FieldRole::BrokenCode => "brokenCode",
            FieldRole::Error => "error",
            FieldRole::CorrectCode => "correctCode",
            FieldRole::Riddle => "riddle",
            FieldRole::Answer => "answer",
            FieldRole::LogicRule => "logicRule",
            FieldRole::HiddenTests => "hiddenTests",
            FieldRole::TokenRules => "tokenRules",
        }
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted quiz record.
///
/// Owned by the extraction pass and consumed by the emitter; nothing outlives
/// a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Ordinal parsed from the boundary line (e.g. 3 for "Q3" or "3️⃣")
    pub ordinal: u32,
    /// Title derived from the boundary line, or the "Unknown" fallback
    pub title: String,
    /// Extracted field text by role; absent roles were absent in the source
    pub fields: BTreeMap<FieldRole, String>,
}

impl Record {
    /// Create an empty record with the given ordinal and title
    pub fn new(ordinal: u32, title: impl Into<String>) -> Self {
        Record {
            ordinal,
            title: title.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Extracted text for a role, if the section was present
    pub fn field(&self, role: FieldRole) -> Option<&str> {
        self.fields.get(&role).map(String::as_str)
    }

    /// Extracted text for a role, or a caller-supplied default
    pub fn field_or<'a>(&'a self, role: FieldRole, default: &'a str) -> &'a str {
        self.field(role).unwrap_or(default)
    }

    /// Whether the section was present in the source block (possibly empty)
    pub fn has(&self, role: FieldRole) -> bool {
        self.fields.contains_key(&role)
    }
}
