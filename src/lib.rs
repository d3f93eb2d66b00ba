//! # priocalc
//!
//! priocalc is an arithmetic expression evaluator written in Rust.
//! It tokenizes and evaluates expressions in a single pass, with support for
//! operator precedence, built-in functions and constants, and variables that
//! persist across evaluations.

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

use tracing::debug;

use crate::interpreter::{environment::Environment, evaluator::core::Evaluator, lexer::tokenize};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error an evaluation can end with. Parse errors
/// describe malformed token streams; runtime errors describe names that cannot
/// be resolved. Both carry the byte offset of the offending token.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches source positions and readable messages.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the evaluation of expressions.
///
/// This module ties together the lexer, the evaluator and the variable
/// environment, and exposes the pieces for callers that want to drive them
/// separately.
///
/// # Responsibilities
/// - Coordinates tokenizing and evaluation.
/// - Provides the `Environment` that carries variables between calls.
pub mod interpreter;

pub use error::Error;

/// Evaluates one expression against a session environment.
///
/// # Returns
/// - `Ok(Some(value))` for a non-empty expression. The value may be infinite
///   or NaN; those are arithmetic results, not failures.
/// - `Ok(None)` when the expression is empty or only whitespace.
///
/// # Errors
/// Returns an error for malformed expressions and unknown variables.
/// Assignments completed before the error are kept in `env`.
///
/// # Examples
/// ```
/// use priocalc::{evaluate, interpreter::environment::Environment};
///
/// let mut env = Environment::new();
///
/// assert_eq!(evaluate("x = 2 ^ 3", &mut env).unwrap(), Some(8.0));
/// assert_eq!(evaluate("x % 3", &mut env).unwrap(), Some(2.0));
/// assert_eq!(evaluate("   ", &mut env).unwrap(), None);
/// assert!(evaluate("y + 1", &mut env).is_err());
/// ```
pub fn evaluate(expression: &str, env: &mut Environment) -> Result<Option<f64>, Error> {
    let tokens = tokenize(expression);
    Evaluator::new(&tokens, env).evaluate()
}

/// Evaluates a script and returns the last value it produced.
///
/// Every line of `source` is one expression; all lines share a single fresh
/// environment, so later lines see earlier assignments. Blank lines produce
/// no value. Evaluation stops at the first failing line.
///
/// # Errors
/// Returns the error of the first line that fails.
///
/// # Examples
/// ```
/// use priocalc::get_result;
///
/// let source = "r = 2\npi * r ^ 2";
/// let area = get_result(source, false).unwrap().unwrap();
/// assert!((area - 4.0 * std::f64::consts::PI).abs() < 1e-12);
///
/// // `x` is never assigned.
/// assert!(get_result("y = x + 1", false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<Option<f64>, Error> {
    let mut env = Environment::new();
    let mut result = None;

    for (number, line) in source.lines().enumerate() {
        if let Some(value) = evaluate(line, &mut env)? {
            debug!(line = number + 1, value, "line evaluated");
            result = Some(value);
        }
    }

    if auto_print && let Some(v) = result {
        println!("{v}");
    }

    Ok(result)
}
