/// The environment module stores variables between evaluations.
///
/// An `Environment` maps variable names to their last assigned values. It is
/// owned by the caller and lent to every evaluation, so a session can carry
/// assignments from one expression to the next.
pub mod environment;
/// The evaluator module computes results directly from tokens.
///
/// The evaluator walks the token stream with a recursive-descent parser that
/// evaluates as it goes, without building a syntax tree. It implements
/// operator precedence, function application, constants, and variable
/// assignment.
///
/// # Responsibilities
/// - Evaluates literals, groups, operators, functions, constants and names.
/// - Reads and writes the session environment.
/// - Reports syntax and name errors with the position of the offending token.
pub mod evaluator;
/// The lexer module tokenizes expression text for the evaluator.
///
/// The lexer reads the raw source text and produces typed tokens: numbers,
/// identifiers, operators and parentheses. A normalization pass afterwards
/// decides whether each `-` is a negation or a subtraction.
///
/// # Responsibilities
/// - Converts the input characters into tokens with their byte offsets.
/// - Rewrites unary minus into multiplication by `-1`.
/// - Passes unrecognized input through as opaque tokens.
pub mod lexer;
