//! # tally
//!
//! tally is a streaming arithmetic evaluator written in Rust. It reads
//! programs made of statements of the form `expression ;`, computes each
//! value while parsing (no syntax tree is ever built), and reports the
//! results one statement at a time.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::fs;

use crate::{
    error::ConfigError,
    interpreter::{evaluator::Evaluator, lexer::Lexer},
};

/// Provides unified error types for configuration and parsing.
///
/// This module defines all errors that can be raised while setting up or
/// running an evaluation. It standardizes error reporting and carries
/// detailed information about failures, including the grammar-level
/// expectation and the source position of the offending input.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (configuration, syntax).
/// - Attaches line and column numbers for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of program evaluation.
///
/// This module ties together the lexer, the token vocabulary, and the
/// parser-evaluator to provide a complete runtime for arithmetic statement
/// programs. The evaluator computes values during recognition, so lexing is
/// the only separate phase.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, token source, evaluator.
/// - Provides the token source contract that binds them together.
/// - Manages the flow of tokens and errors between phases.
pub mod interpreter;

/// Evaluates a program and returns the value of each statement.
///
/// Statements are evaluated in input order. With `auto_print` set, each
/// value is printed on its own `value: <v>` line as soon as its expression
/// has been recognized, and one completion line is printed after the whole
/// input has been consumed. Values produced before a syntax error are
/// therefore printed even though the run itself fails.
///
/// # Errors
/// Returns an error if lexing or parsing fails; the first malformed token
/// aborts the run.
///
/// # Examples
/// ```
/// use tally::evaluate;
///
/// let values = evaluate("1 + 2; 2 * 3;", false).unwrap();
/// assert_eq!(values, vec![3.0, 6.0]);
///
/// // Malformed input fails on the first offending token.
/// assert!(evaluate("2 + ;", false).is_err());
/// ```
pub fn evaluate(source: &str, auto_print: bool) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    let mut evaluator = Evaluator::new(Lexer::new(source))?;

    let mut values = Vec::new();
    evaluator.run(|value| {
                 if auto_print {
                     println!("value: {value}");
                 }
                 values.push(value);
             })?;

    if auto_print {
        println!("Syntax analysis finished successfully!");
    }
    Ok(values)
}

/// Evaluates the program stored in a file.
///
/// Reads the file and delegates to [`evaluate`].
///
/// # Errors
/// Returns a [`ConfigError`] if the file cannot be read, or any error
/// [`evaluate`] reports for its contents.
pub fn evaluate_file(path: &str, auto_print: bool) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    let source = fs::read_to_string(path).map_err(|_| {
                                             ConfigError::UnreadableInput { path:
                                                                                path.to_string(), }
                                         })?;
    evaluate(&source, auto_print)
}
