//! Field extraction tests over whole documents

use quizgen::quiz::extracting::extract;
use quizgen::quiz::record::FieldRole;
use quizgen::quiz::segmenting::SegmentedCorpus;
use quizgen::quiz::testing;

#[test]
fn canonical_records_recover_all_fields() {
    let corpus = SegmentedCorpus::segment(testing::two_record_corpus()).unwrap();
    let first = extract(&corpus, &corpus.spans()[0]).unwrap();

    assert_eq!(first.title, "Missing Semicolon");
    assert_eq!(first.field(FieldRole::Question), Some("Fix the declaration."));
    assert_eq!(first.field(FieldRole::BrokenCode), Some("int a = 10"));
    assert_eq!(first.field(FieldRole::CorrectCode), Some("int a = 10;"));
    assert_eq!(
        first.field(FieldRole::Riddle),
        Some("A sentence must end before another begins.")
    );
    assert_eq!(first.field(FieldRole::Answer), Some("Add ;"));
}

#[test]
fn broken_code_is_verbatim_text_between_labels() {
    let corpus = SegmentedCorpus::segment(testing::two_record_corpus()).unwrap();
    let second = extract(&corpus, &corpus.spans()[1]).unwrap();

    assert_eq!(
        second.field(FieldRole::BrokenCode),
        Some("System.out.println(Hello World);")
    );
    assert_eq!(
        second.field(FieldRole::CorrectCode),
        Some("System.out.println(\"Hello World\");")
    );
}

#[test]
fn optional_sections_missing_from_one_record() {
    // keycap_corpus record 2 has no Error section; record 1 does.
    let corpus = SegmentedCorpus::segment(testing::keycap_corpus()).unwrap();

    let first = extract(&corpus, &corpus.spans()[0]).unwrap();
    let second = extract(&corpus, &corpus.spans()[1]).unwrap();

    assert_eq!(first.field(FieldRole::Error), Some("Missing semicolon."));
    assert!(!second.has(FieldRole::Error));
}

#[test]
fn inline_question_labels_capture_same_line_content() {
    let corpus = SegmentedCorpus::segment(testing::keycap_corpus()).unwrap();
    let first = extract(&corpus, &corpus.spans()[0]).unwrap();

    assert_eq!(
        first.field(FieldRole::Question),
        Some("Fix the declaration below.")
    );
    assert_eq!(first.title, "The Lost Semicolon");
}

#[test]
fn all_spans_extract_without_failure() {
    for source in [testing::two_record_corpus(), testing::keycap_corpus()] {
        let corpus = SegmentedCorpus::segment(source).unwrap();
        for span in corpus.spans() {
            extract(&corpus, span).unwrap();
        }
    }
}
