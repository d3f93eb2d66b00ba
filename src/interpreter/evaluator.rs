/// Core evaluation state.
///
/// Contains the `Evaluator` with its token cursor and environment borrow,
/// the entry point for a whole token stream, and the shared result type.
pub mod core;

/// Binary operator evaluation.
///
/// Defines the arithmetic operators, their priorities, and the precedence
/// climbing loop that combines operands.
pub mod binary;

/// Simple expression evaluation.
///
/// Evaluates the operands of binary chains: literals, parenthesised groups,
/// function applications, constants, and variable reads and assignments.
pub mod simple;

/// Builtin functions and constants.
///
/// Holds the lookup tables for `sin`, `cos`, `tan`, `sqrt`, `round`, `ln`,
/// `pi` and `e`.
pub mod function;
