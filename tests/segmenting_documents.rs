//! Segmentation tests over whole documents
//!
//! These cover the segmenter's contract: one span per well-formed boundary,
//! contiguous and exhaustive coverage after the discarded preamble, and a
//! hard error when no boundary exists.

use quizgen::quiz::segmenting::{SegmentError, SegmentedCorpus};
use quizgen::quiz::testing;

#[test]
fn two_boundaries_yield_two_spans() {
    let corpus = SegmentedCorpus::segment(testing::two_record_corpus()).unwrap();

    assert_eq!(corpus.spans().len(), 2);
    assert_eq!(corpus.spans()[0].ordinal, 1);
    assert_eq!(corpus.spans()[1].ordinal, 2);
}

#[test]
fn spans_reconstruct_the_document_suffix() {
    let source = testing::keycap_corpus();
    let corpus = SegmentedCorpus::segment(source).unwrap();

    let reassembled: Vec<String> = corpus
        .spans()
        .iter()
        .map(|span| corpus.span_text(span))
        .collect();

    // The preamble ("intro chatter" plus a blank line) is discarded; the
    // spans cover everything from the first boundary to the end, exactly.
    let first_boundary = source.find("1️⃣").unwrap();
    let expected = source[first_boundary..].trim_end_matches('\n');
    assert_eq!(reassembled.join("\n"), expected);
}

#[test]
fn spans_are_strictly_increasing_and_non_overlapping() {
    let corpus = SegmentedCorpus::segment(testing::two_record_corpus()).unwrap();

    for pair in corpus.spans().windows(2) {
        assert!(pair[0].start < pair[0].end);
        assert_eq!(pair[0].end, pair[1].start);
    }
    assert_eq!(corpus.spans().last().unwrap().end, corpus.lines().len());
}

#[test]
fn keycap_ordinals_are_recognized() {
    let corpus = SegmentedCorpus::segment(testing::keycap_corpus()).unwrap();

    let ordinals: Vec<u32> = corpus.spans().iter().map(|s| s.ordinal).collect();
    assert_eq!(ordinals, [1, 2]);
}

#[test]
fn markerless_document_is_a_detected_failure() {
    let err = SegmentedCorpus::segment(testing::markerless_corpus()).unwrap_err();

    let SegmentError::NoBoundariesFound { excerpt } = err;
    assert!(excerpt.starts_with("Just some notes"));
}

#[test]
fn error_message_carries_the_excerpt() {
    let err = SegmentedCorpus::segment(testing::markerless_corpus()).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("no record boundaries found"));
    assert!(message.contains("Just some notes"));
}
