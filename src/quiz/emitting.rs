//! Declaration emission
//!
//! Renders extracted records as source-code literals, one declaration per
//! record in document order, wrapped in fixed header/footer boilerplate. Two
//! target shapes exist, matching the two consumers of the generated text:
//!
//! - [`EmitTarget::Questions`]: a `generateLevelNQuestions` function that
//!   appends `Question(...)` values.
//! - [`EmitTarget::Puzzles`]: a `static let allPuzzles: [Puzzle]` array.
//!
//! Structural fields (difficulty, language tag, the lock flag) come from
//! [`EmitOptions`], not from the parsed text. Defaults for missing optional
//! fields are applied here, at serialization time; extraction never invents
//! content.

use crate::quiz::escaping::escape;
use crate::quiz::record::{FieldRole, Record};
use std::fmt;
use std::str::FromStr;

/// Default puzzle description when no Question section was present
const DEFAULT_DESCRIPTION: &str = "Fix the code.";
/// Default story/error text when no Error section was present
const DEFAULT_ERROR: &str = "Logic Error / Unexpected Behavior";

/// Source language tag embedded in the generated declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Swift,
    Java,
    C,
}

impl Language {
    /// The enum-case literal used in the generated source
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Swift => ".swift",
            Language::Java => ".java",
            Language::C => ".c",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Swift => "swift",
            Language::Java => "java",
            Language::C => "c",
        };
        f.write_str(name)
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "swift" => Ok(Language::Swift),
            "java" => Ok(Language::Java),
            "c" => Ok(Language::C),
            other => Err(format!("unknown language '{}'", other)),
        }
    }
}

/// Which declaration shape to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitTarget {
    Questions,
    Puzzles,
}

impl FromStr for EmitTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "questions" => Ok(EmitTarget::Questions),
            "puzzles" => Ok(EmitTarget::Puzzles),
            other => Err(format!("unknown target '{}'", other)),
        }
    }
}

/// Driver-supplied structural fields for emission
#[derive(Debug, Clone)]
pub struct EmitOptions {
    pub target: EmitTarget,
    pub level: u32,
    pub difficulty: u32,
    pub language: Language,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            target: EmitTarget::Questions,
            level: 1,
            difficulty: 1,
            language: Language::Swift,
        }
    }
}

/// Render all records into one generated source text
pub fn emit(records: &[Record], opts: &EmitOptions) -> String {
    match opts.target {
        EmitTarget::Questions => emit_questions(records, opts),
        EmitTarget::Puzzles => emit_puzzles(records, opts),
    }
}

fn emit_questions(records: &[Record], opts: &EmitOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "    private static func generateLevel{}Questions(for language: Language) -> [Question] {{\n",
        opts.level
    ));
    out.push_str("        var questions: [Question] = []\n");
    out.push('\n');
    out.push_str(&format!("        if language == {} {{\n", opts.language.tag()));

    for record in records {
        let concept = record
            .field(FieldRole::LogicRule)
            .or_else(|| record.field(FieldRole::Answer))
            .unwrap_or("");

        out.push_str("            questions.append(Question(\n");
        out.push_str(&format!(
            "                title: \"Level {} – Question {}\",\n",
            opts.level, record.ordinal
        ));
        out.push_str(&format!(
            "                description: \"{}\",\n",
            escape(record.field_or(FieldRole::Error, ""))
        ));
        out.push_str(&format!(
            "                initialCode: \"{}\",\n",
            escape(record.field_or(FieldRole::BrokenCode, ""))
        ));
        out.push_str(&format!(
            "                correctCode: \"{}\",\n",
            escape(record.field_or(FieldRole::CorrectCode, ""))
        ));
        out.push_str(&format!("                difficulty: {},\n", opts.difficulty));
        out.push_str(&format!(
            "                riddle: \"{}\",\n",
            escape(record.field_or(FieldRole::Riddle, ""))
        ));
        out.push_str(&format!(
            "                conceptExplanation: \"{}\",\n",
            escape(concept)
        ));
        out.push_str(&format!("                language: {},\n", opts.language.tag()));
        out.push_str(&format!(
            "                expectedPatterns: [{}]\n",
            pattern_list(record.field(FieldRole::TokenRules))
        ));
        out.push_str("            ))\n");
    }

    out.push_str("        }\n");
    out.push_str("        return questions\n");
    out.push_str("    }\n");
    out
}

fn emit_puzzles(records: &[Record], opts: &EmitOptions) -> String {
    let mut out = String::new();
    out.push_str("static let allPuzzles: [Puzzle] = [\n");

    for (i, record) in records.iter().enumerate() {
        let title = format!("Level {}: {}", i + 1, record.title);
        let story = format!(
            "System Error: {}",
            escape(record.field_or(FieldRole::Error, DEFAULT_ERROR))
        );

        out.push_str("        Puzzle(\n");
        out.push_str(&format!("            title: \"{}\",\n", escape(&title)));
        out.push_str(&format!(
            "            description: \"{}\",\n",
            escape(record.field_or(FieldRole::Question, DEFAULT_DESCRIPTION))
        ));
        out.push_str(&format!(
            "            initialCode: \"{}\",\n",
            escape(record.field_or(FieldRole::BrokenCode, ""))
        ));
        out.push_str(&format!(
            "            correctCode: \"{}\",\n",
            escape(record.field_or(FieldRole::CorrectCode, ""))
        ));
        out.push_str(&format!("            difficulty: {},\n", opts.difficulty));
        out.push_str(&format!(
            "            hints: [\"{}\"],\n",
            escape(record.field_or(FieldRole::Riddle, ""))
        ));
        out.push_str(&format!("            storyFragment: \"{}\",\n", story));
        // Only the first puzzle starts unlocked.
        out.push_str(&format!("            locked: {}\n", i != 0));
        out.push_str("        ),\n");
    }

    out.push_str("    ]");
    out
}

/// Render the Regex / Token Rules field as a literal array: one quoted,
/// escaped entry per non-empty line.
fn pattern_list(token_rules: Option<&str>) -> String {
    let Some(raw) = token_rules else {
        return String::new();
    };
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| format!("\"{}\"", escape(l)))
        .collect::<Vec<_>>()
        .join(", ")
}
