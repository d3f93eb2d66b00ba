use tracing::debug;

use crate::{
    error::Error,
    interpreter::{environment::Environment, lexer::Token},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an [`Error`]
/// describing the failure.
pub type EvalResult<T> = Result<T, Error>;

/// Evaluates a token stream while parsing it.
///
/// No syntax tree is built: every grammar rule computes its value as soon as
/// its tokens are consumed. The evaluator owns the single cursor into the
/// token slice and borrows the caller's [`Environment`] mutably, so nested
/// rules (parentheses, function arguments, assignment right-hand sides) all
/// advance the same position and see assignments made earlier in the same
/// expression.
///
/// ## Usage
///
/// An `Evaluator` is created for one token stream and consumed by
/// [`Evaluator::evaluate`]. The environment outlives it.
pub struct Evaluator<'t, 'e> {
    tokens: &'t [(Token, usize)],
    cursor: usize,
    pub(super) env: &'e mut Environment,
}

impl<'t, 'e> Evaluator<'t, 'e> {
    /// Starts an evaluation of `tokens` with the cursor on the first token.
    #[must_use]
    pub const fn new(tokens: &'t [(Token, usize)], env: &'e mut Environment) -> Self {
        Self { tokens,
               cursor: 0,
               env }
    }

    /// Evaluates the whole token stream.
    ///
    /// # Returns
    /// - `Ok(None)` when there are no tokens at all.
    /// - `Ok(Some(value))` for a complete expression.
    ///
    /// # Errors
    /// Any parse or runtime error aborts the evaluation. Assignments that were
    /// already committed stay in the environment.
    ///
    /// Evaluation stops after the first complete expression. Tokens left over
    /// after it, such as an extra `)`, are ignored: `-(-(-4)))` is `-4`.
    ///
    /// # Example
    /// ```
    /// use priocalc::interpreter::{
    ///     environment::Environment, evaluator::core::Evaluator, lexer::tokenize,
    /// };
    ///
    /// let mut env = Environment::new();
    /// let tokens = tokenize("2 + 2 * 2");
    /// assert_eq!(Evaluator::new(&tokens, &mut env).evaluate().unwrap(), Some(6.0));
    ///
    /// assert_eq!(Evaluator::new(&[], &mut env).evaluate().unwrap(), None);
    /// ```
    pub fn evaluate(mut self) -> EvalResult<Option<f64>> {
        if self.tokens.is_empty() {
            return Ok(None);
        }
        debug!(tokens = self.tokens.len(), "evaluating expression");

        let value = self.parse()?;

        if let Some((token, position)) = self.peek() {
            debug!(%token, position = *position, "ignoring tokens after complete expression");
        }

        Ok(Some(value))
    }

    /// Parses and evaluates a full expression.
    ///
    /// Grammar: `expression := binary(0)`
    pub(super) fn parse(&mut self) -> EvalResult<f64> {
        self.parse_binary(0)
    }

    /// Returns the token under the cursor without consuming it.
    pub(super) fn peek(&self) -> Option<&'t (Token, usize)> {
        self.tokens.get(self.cursor)
    }

    /// Consumes and returns the token under the cursor.
    pub(super) fn advance(&mut self) -> Option<&'t (Token, usize)> {
        let item = self.tokens.get(self.cursor);
        if item.is_some() {
            self.cursor += 1;
        }
        item
    }
}
