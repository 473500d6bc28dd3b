//! Shared corpus samples for tests
//!
//! Small hand-written corpora in the shapes the parser must handle, used by
//! both unit and integration tests.

/// Two well-formed Q-style records with code fields
pub fn two_record_corpus() -> &'static str {
    "Q1 — Missing Semicolon\n\
     Question\n\
     Fix the declaration.\n\
     Broken Code\n\
     int a = 10\n\
     Correct Code\n\
     int a = 10;\n\
     Riddle\n\
     A sentence must end before another begins.\n\
     Answer\n\
     Add ;\n\
     Q2 — Missing Quotes\n\
     Question\n\
     Fix the print statement.\n\
     Broken Code\n\
     System.out.println(Hello World);\n\
     Correct Code\n\
     System.out.println(\"Hello World\");\n\
     Riddle\n\
     Words need walls to be spoken.\n\
     Answer\n\
     Add \" \".\n"
}

/// Emoji-numbered puzzle-style corpus with inline labels and an ornamented
/// header
pub fn keycap_corpus() -> &'static str {
    "intro chatter to discard\n\
     \n\
     1️⃣ The Lost Semicolon\n\
     Question: Fix the declaration below.\n\
     Broken Code\n\
     let x = 5\n\
     Error\n\
     Missing semicolon.\n\
     Correct Code\n\
     let x = 5;\n\
     Riddle\n\
     Every statement wants an ending.\n\
     2️⃣ The Silent String\n\
     Question: Make it speak.\n\
     Broken Code\n\
     print(Hello)\n\
     Correct Code\n\
     print(\"Hello\")\n\
     Riddle\n\
     Words need walls.\n"
}

/// A corpus with no boundary markers at all
pub fn markerless_corpus() -> &'static str {
    "Just some notes about the quiz app.\n\
     Nothing here is a record.\n"
}
