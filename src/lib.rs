//! # arithmo
//!
//! arithmo is an arithmetic expression interpreter written in Rust.
//! It evaluates expressions made of non-negative integer literals, the four
//! operators `+ - * /` and parentheses, with the usual precedence and left
//! associativity. Division is true division.
//!
//! The pipeline has three stages, each owning the previous one: a pull-based
//! [`Lexer`](interpreter::lexer::Lexer), a recursive-descent
//! [`Parser`](interpreter::parser::core::Parser) and a tree-walking
//! [`Interpreter`](interpreter::evaluator::core::Interpreter). [`evaluate`]
//! wires them together for one source string.

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

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Interpreter, lexer::Lexer, parser::core::Parser, value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum, the tree the parser builds and the
/// evaluator walks, and the `BinaryOperator` tags stored in it.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every error carries the byte position in the source where it was
/// detected.
///
/// # Responsibilities
/// - Defines one error enum per stage (lexer, parser, evaluator).
/// - Unifies them in a crate-level `Error` returned by [`evaluate`].
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation and value
/// representation.
pub mod interpreter;
/// Interactive read-eval-print loop.
///
/// Reads one expression per line, prints its value or the error, and stops
/// at `exit` or end of input.
pub mod repl;

/// Evaluates one arithmetic expression.
///
/// Builds a fresh lexer, parser and interpreter for `source` and runs them to
/// completion.
///
/// # Errors
/// Returns `Error::Lexical`, `Error::Parse` or `Error::Runtime` for the first
/// problem found. No partial result is produced.
///
/// # Examples
/// ```
/// use arithmo::{error::Error, evaluate, interpreter::value::Value};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Value::Integer(14));
/// assert_eq!(evaluate("7 / 2").unwrap(), Value::Real(3.5));
///
/// // Division by zero is an error, not a panic.
/// assert!(matches!(evaluate("5 / 0"), Err(Error::Runtime(_))));
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    let parser = Parser::new(Lexer::new(source))?;
    Interpreter::new(parser).interpret()
}
