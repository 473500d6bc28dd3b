//! Property-based tests for literal escaping
//!
//! The escape order (backslashes, then quotes, then newlines) must make the
//! transformation invertible for any field text, including text that mixes
//! all three special characters.

use proptest::prelude::*;
use quizgen::quiz::escaping::{escape, unescape};

proptest! {
    #[test]
    fn roundtrip_is_identity(input in ".*") {
        prop_assert_eq!(unescape(&escape(&input)), input);
    }

    #[test]
    fn roundtrip_with_dense_special_characters(
        input in proptest::collection::vec(
            prop_oneof![
                Just('\\'),
                Just('"'),
                Just('\n'),
                Just('n'),
                Just('a'),
            ],
            0..64,
        )
    ) {
        let input: String = input.into_iter().collect();
        prop_assert_eq!(unescape(&escape(&input)), input);
    }

    #[test]
    fn escaped_output_has_no_raw_newlines_or_quotes(input in ".*") {
        let escaped = escape(&input);
        prop_assert!(!escaped.contains('\n'));
        // Every quote in the output is escaped.
        let bytes = escaped.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if *b == b'"' {
                prop_assert!(i > 0 && bytes[i - 1] == b'\\');
            }
        }
    }
}

#[test]
fn spec_example_round_trips() {
    let input = "say \"hi\"\nline2\\end";
    let escaped = escape(input);

    assert_eq!(escaped, "say \\\"hi\\\"\\nline2\\\\end");
    assert_eq!(unescape(&escaped), input);
}
