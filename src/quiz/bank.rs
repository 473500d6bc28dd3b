//! Built-in question bank
//!
//! A hardcoded table of quiz entries that ships with the tool, for levels
//! that were authored directly instead of being parsed from a raw corpus.
//! The bank is an immutable configuration list; it is converted to plain
//! [`Record`]s and rendered through the same emitter as parsed corpora.

use crate::quiz::record::{FieldRole, Record};

/// One authored bank entry
#[derive(Debug, Clone, Copy)]
pub struct BankEntry {
    pub title: &'static str,
    pub broken: &'static str,
    pub error: &'static str,
    pub correct: &'static str,
    pub riddle: &'static str,
    pub answer: &'static str,
}

/// The authored Java level-1 bank
pub const JAVA_LEVEL1: &[BankEntry] = &[
    BankEntry {
        title: "Missing Semicolon",
        broken: "int a = 10\nSystem.out.println(a);",
        error: "Missing semicolon after variable declaration.",
        correct: "int a = 10;\nSystem.out.println(a);",
        riddle: "A sentence must end before another begins.",
        answer: "Add ;",
    },
    BankEntry {
        title: "Missing Quotes",
        broken: "System.out.println(Hello World);",
        error: "String literal must be inside quotation marks.",
        correct: "System.out.println(\"Hello World\");",
        riddle: "Words need walls to be spoken.",
        answer: "Add \" \".",
    },
    BankEntry {
        title: "Wrong Arithmetic Operator",
        broken: "int result = 8 + 2;  // supposed to multiply\nSystem.out.println(result);",
        error: "Using addition instead of multiplication.",
        correct: "int result = 8 * 2;\nSystem.out.println(result);",
        riddle: "When growth is required, combine through multiplication.",
        answer: "Replace + with *.",
    },
    BankEntry {
        title: "Assignment in Condition",
        broken: "int x = 5;\nif(x = 5) {\n    System.out.println(\"Equal\");\n}",
        error: "Assignment used instead of comparison.",
        correct: "int x = 5;\nif(x == 5) {\n    System.out.println(\"Equal\");\n}",
        riddle: "Comparing is not assigning.",
        answer: "Use ==.",
    },
    BankEntry {
        title: "Wrong Data Type",
        broken: "int price = 9.99;",
        error: "Decimal cannot be stored in int.",
        correct: "double price = 9.99;",
        riddle: "Fractions need more space than integers.",
        answer: "Use double.",
    },
    BankEntry {
        title: "Boolean Written as String",
        broken: "boolean isReady = \"true\";",
        error: "Boolean cannot store a string.",
        correct: "boolean isReady = true;",
        riddle: "Truth is not text.",
        answer: "Remove quotation marks.",
    },
    BankEntry {
        title: "Incorrect Increment",
        broken: "int count = 3;\ncount =+ 1;\nSystem.out.println(count);",
        error: "Wrong increment syntax.",
        correct: "int count = 3;\ncount += 1;\nSystem.out.println(count);",
        riddle: "Add to yourself properly.",
        answer: "Use +=.",
    },
    BankEntry {
        title: "Wrong Loop Direction",
        broken: "for(int i = 0; i < 5; i--) {\n    System.out.println(i);\n}",
        error: "Decrement causes infinite loop.",
        correct: "for(int i = 0; i < 5; i++) {\n    System.out.println(i);\n}",
        riddle: "To move forward, you must increase.",
        answer: "Use i++.",
    },
    BankEntry {
        title: "Array Index Out of Bounds",
        broken: "int[] arr = {1,2,3};\nSystem.out.println(arr[3]);",
        error: "Index 3 does not exist.",
        correct: "int[] arr = {1,2,3};\nSystem.out.println(arr[2]);",
        riddle: "Counting begins at zero.",
        answer: "Use valid index.",
    },
    BankEntry {
        title: "String Comparison",
        broken: "String name = \"Alex\";\nif(name == \"Alex\") {\n    System.out.println(\"Match\");\n}",
        error: "== compares references.",
        correct: "String name = \"Alex\";\nif(name.equals(\"Alex\")) {\n    System.out.println(\"Match\");\n}",
        riddle: "Compare meaning, not memory.",
        answer: "Use .equals().",
    },
    BankEntry {
        title: "Missing Parentheses in Method Call",
        broken: "System.out.println;",
        error: "Method call requires parentheses.",
        correct: "System.out.println();",
        riddle: "A function must be opened to speak.",
        answer: "Add ().",
    },
    BankEntry {
        title: "Variable Used Before Declaration",
        broken: "x = 10;\nint x;",
        error: "Variable declared after usage.",
        correct: "int x;\nx = 10;",
        riddle: "A name must exist before it's called.",
        answer: "Declare first.",
    },
];

/// Convert bank entries to records, ordinals assigned in table order
pub fn records(bank: &[BankEntry]) -> Vec<Record> {
    bank.iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut record = Record::new(i as u32 + 1, entry.title);
            record
                .fields
                .insert(FieldRole::BrokenCode, entry.broken.to_string());
            record
                .fields
                .insert(FieldRole::Error, entry.error.to_string());
            record
                .fields
                .insert(FieldRole::CorrectCode, entry.correct.to_string());
            record
                .fields
                .insert(FieldRole::Riddle, entry.riddle.to_string());
            record
                .fields
                .insert(FieldRole::Answer, entry.answer.to_string());
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::emitting::{emit, EmitOptions, Language};

    #[test]
    fn test_bank_ordinals_follow_table_order() {
        let records = records(JAVA_LEVEL1);
        assert_eq!(records.len(), JAVA_LEVEL1.len());
        assert_eq!(records[0].ordinal, 1);
        assert_eq!(records.last().unwrap().ordinal, JAVA_LEVEL1.len() as u32);
    }

    #[test]
    fn test_bank_entries_carry_all_roles() {
        for record in records(JAVA_LEVEL1) {
            assert!(record.has(FieldRole::BrokenCode), "{}", record.title);
            assert!(record.has(FieldRole::Error), "{}", record.title);
            assert!(record.has(FieldRole::CorrectCode), "{}", record.title);
            assert!(record.has(FieldRole::Riddle), "{}", record.title);
            assert!(record.has(FieldRole::Answer), "{}", record.title);
        }
    }

    #[test]
    fn test_bank_emits_through_the_question_profile() {
        let opts = EmitOptions {
            language: Language::Java,
            ..EmitOptions::default()
        };
        let out = emit(&records(JAVA_LEVEL1), &opts);

        assert!(out.contains("if language == .java {"));
        assert!(out.contains("initialCode: \"int a = 10\\nSystem.out.println(a);\""));
        assert!(out.contains("conceptExplanation: \"Add ;\""));
    }
}
