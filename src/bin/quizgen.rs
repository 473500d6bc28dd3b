//! Command-line interface for quizgen
//! This binary turns raw quiz corpora into generated source declarations.
//!
//! Usage:
//!   quizgen generate `<path>` [--target `<target>`] [--format `<format>`] [--output `<path>`]
//!   quizgen inspect `<path>`                 - Report detected records without generating
//!   quizgen bank                           - Emit the built-in question bank

use clap::{Arg, Command};
use quizgen::quiz::bank;
use quizgen::quiz::emitting::{emit, EmitOptions, EmitTarget, Language};
use quizgen::quiz::loader::CorpusLoader;
use quizgen::quiz::record::Record;
use std::path::PathBuf;

fn main() {
    let matches = Command::new("quizgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing quiz corpora and generating quiz declarations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Parse a corpus and emit generated declarations")
                .arg(
                    Arg::new("path")
                        .help("Path to the raw corpus file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("target")
                        .long("target")
                        .short('t')
                        .help("Declaration shape ('questions' or 'puzzles')")
                        .default_value("questions"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('swift' or 'json')")
                        .default_value("swift"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write to this file instead of stdout"),
                )
                .arg(
                    Arg::new("level")
                        .long("level")
                        .help("Level number embedded in titles and the function name")
                        .default_value("1"),
                )
                .arg(
                    Arg::new("difficulty")
                        .long("difficulty")
                        .help("Difficulty tag embedded in each declaration")
                        .default_value("1"),
                )
                .arg(
                    Arg::new("language")
                        .long("language")
                        .short('l')
                        .help("Language tag ('swift', 'java' or 'c')")
                        .default_value("swift"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Report detected records, titles and present fields")
                .arg(
                    Arg::new("path")
                        .help("Path to the raw corpus file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("bank").about("Emit the built-in Java level-1 question bank"))
        .get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let path = m.get_one::<String>("path").unwrap();
            let opts = EmitOptions {
                target: parse_or_exit::<EmitTarget>(m.get_one::<String>("target").unwrap()),
                level: parse_or_exit::<u32>(m.get_one::<String>("level").unwrap()),
                difficulty: parse_or_exit::<u32>(m.get_one::<String>("difficulty").unwrap()),
                language: parse_or_exit::<Language>(m.get_one::<String>("language").unwrap()),
            };
            let format = m.get_one::<String>("format").unwrap();
            let output = m.get_one::<String>("output").map(PathBuf::from);
            handle_generate_command(path, opts, format, output);
        }
        Some(("inspect", m)) => {
            let path = m.get_one::<String>("path").unwrap();
            handle_inspect_command(path);
        }
        Some(("bank", _)) => {
            handle_bank_command();
        }
        _ => unreachable!(),
    }
}

fn parse_or_exit<T: std::str::FromStr>(raw: &str) -> T
where
    T::Err: std::fmt::Display,
{
    raw.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the generate command
fn handle_generate_command(path: &str, opts: EmitOptions, format: &str, output: Option<PathBuf>) {
    let loader = load_or_exit(path);

    let (rendered, diagnostics) = match format {
        "swift" => match loader.generate(opts) {
            Ok(generated) => (generated.source, generated.diagnostics),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        "json" => match loader.parse() {
            Ok(outcome) => (render_json(&outcome.records), outcome.diagnostics),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        other => {
            eprintln!("Error: unknown format '{}'", other);
            std::process::exit(1);
        }
    };

    for diagnostic in &diagnostics {
        eprintln!("Warning: {}", diagnostic);
    }

    match output {
        Some(out_path) => {
            if let Err(e) = std::fs::write(&out_path, rendered) {
                eprintln!("Error writing {}: {}", out_path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", rendered),
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str) {
    let loader = load_or_exit(path);
    let outcome = loader.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("records: {}", outcome.records.len());
    for record in &outcome.records {
        let fields: Vec<&str> = record.fields.keys().map(|role| role.as_str()).collect();
        println!("  {:>3}  {}  [{}]", record.ordinal, record.title, fields.join(", "));
    }
    for diagnostic in &outcome.diagnostics {
        eprintln!("Warning: {}", diagnostic);
    }
}

/// Handle the bank command
fn handle_bank_command() {
    let opts = EmitOptions {
        language: Language::Java,
        ..EmitOptions::default()
    };
    print!("{}", emit(&bank::records(bank::JAVA_LEVEL1), &opts));
}

fn load_or_exit(path: &str) -> CorpusLoader {
    CorpusLoader::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

fn render_json(records: &[Record]) -> String {
    // Serialization of plain data types does not fail.
    serde_json::to_string_pretty(records).expect("record serialization")
}
