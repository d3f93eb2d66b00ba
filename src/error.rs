/// Parsing errors.
///
/// Defines the errors raised while the token stream is being read: missing or
/// stray parentheses, tokens that cannot start an operand, running out of
/// input, and input left over after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while values are being resolved: references to
/// variables that were never assigned and function names without a builtin.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a single evaluation.
///
/// Numeric special values (infinity, NaN) are results, not errors, so an
/// `Error` always means the expression itself could not be evaluated.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The token stream did not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression was well formed but referred to something undefined.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
