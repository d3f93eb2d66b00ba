use thiserror::Error;

/// Represents all errors that can occur while resolving names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// Read a variable that was never assigned.
    #[error("Error at position {position}: Unknown variable: {name}.")]
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
    /// A function name reached dispatch without a matching builtin.
    #[error("Error at position {position}: Unknown function: {name}.")]
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
}
