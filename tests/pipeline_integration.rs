//! End-to-end pipeline tests: corpus text in, generated declarations out

use quizgen::quiz::emitting::{EmitOptions, EmitTarget, Language};
use quizgen::quiz::escaping::unescape;
use quizgen::quiz::pipeline::Generator;
use quizgen::quiz::record::FieldRole;
use quizgen::quiz::segmenting::SegmentError;
use quizgen::quiz::testing;

#[test]
fn two_block_scenario_generates_two_declarations() {
    let generator = Generator::new(EmitOptions::default());
    let generated = generator.generate(testing::two_record_corpus()).unwrap();

    assert_eq!(generated.record_count, 2);
    assert!(generated.diagnostics.is_empty());
    assert_eq!(
        generated.source.matches("questions.append(Question(").count(),
        2
    );
    assert!(generated.source.contains("title: \"Level 1 – Question 1\""));
    assert!(generated.source.contains("title: \"Level 1 – Question 2\""));
}

#[test]
fn generated_literals_unescape_back_to_the_extracted_text() {
    let outcome = Generator::parse(testing::two_record_corpus()).unwrap();
    let broken = outcome.records[0].field(FieldRole::BrokenCode).unwrap();

    let generator = Generator::new(EmitOptions::default());
    let generated = generator.generate(testing::two_record_corpus()).unwrap();

    // Pull the first initialCode literal back out and invert the escaping.
    let needle = "initialCode: \"";
    let start = generated.source.find(needle).unwrap() + needle.len();
    let end = generated.source[start..].find("\",\n").unwrap() + start;
    assert_eq!(unescape(&generated.source[start..end]), broken);
}

#[test]
fn puzzle_target_wraps_and_locks() {
    let opts = EmitOptions {
        target: EmitTarget::Puzzles,
        ..EmitOptions::default()
    };
    let generated = Generator::new(opts).generate(testing::keycap_corpus()).unwrap();

    assert!(generated.source.starts_with("static let allPuzzles: [Puzzle] = [\n"));
    assert!(generated.source.ends_with("    ]"));
    assert!(generated.source.contains("title: \"Level 1: The Lost Semicolon\""));
    assert!(generated.source.contains("locked: false"));
    assert!(generated.source.contains("locked: true"));
    // Record 2 has no Error section: the default story text applies at
    // serialization time only.
    assert!(generated
        .source
        .contains("storyFragment: \"System Error: Logic Error / Unexpected Behavior\""));
}

#[test]
fn java_level_two_options_flow_through() {
    let opts = EmitOptions {
        level: 2,
        difficulty: 2,
        language: Language::Java,
        ..EmitOptions::default()
    };
    let generated = Generator::new(opts).generate(testing::two_record_corpus()).unwrap();

    assert!(generated.source.contains("generateLevel2Questions"));
    assert!(generated.source.contains("language: .java,"));
    assert!(generated.source.contains("difficulty: 2,"));
}

#[test]
fn plain_numeric_markers_segment_too() {
    let source = "1. Off By One\nBroken Code\nfor(i in 0...n)\nCorrect Code\nfor(i in 0..<n)\n2. Shadowed Var\nBroken Code\nlet x = x\nCorrect Code\nlet y = x\n";
    let outcome = Generator::parse(source).unwrap();

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[0].ordinal, 1);
    assert_eq!(outcome.records[0].title, "Off By One");
    assert_eq!(outcome.records[1].ordinal, 2);
}

#[test]
fn markerless_corpus_produces_no_output() {
    let generator = Generator::new(EmitOptions::default());
    let err = generator.generate(testing::markerless_corpus()).unwrap_err();
    assert!(matches!(err, SegmentError::NoBoundariesFound { .. }));
}

#[test]
fn records_serialize_to_json() {
    let outcome = Generator::parse(testing::two_record_corpus()).unwrap();
    let json = serde_json::to_string_pretty(&outcome.records).unwrap();

    assert!(json.contains("\"title\": \"Missing Semicolon\""));
    assert!(json.contains("\"brokenCode\": \"int a = 10\""));
}
