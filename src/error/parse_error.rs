use thiserror::Error;

/// Represents all errors that can occur while reading the token stream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// An opened group is never closed.
    #[error("Error at position {position}: Unbalanced parentheses.")]
    UnbalancedParentheses {
        /// Byte offset of the unclosed `(`.
        position: usize,
    },
    /// Found a token that cannot start an operand.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// An operand was required but the input ended.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
}
