//! # quizgen
//!
//! A parser and code generator for coding-quiz corpora: reads a hand-authored
//! text corpus of "broken code / error / fixed code / riddle / answer"
//! entries and emits string-escaped source declarations for the quiz app.
//!
//! The interesting part is the heuristic record segmenter and field extractor
//! in [`quiz::segmenting`] and [`quiz::extracting`]; everything around it is
//! thin glue (file reading, escaping, templated output).

pub mod quiz;
