use tracing::debug;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{call_builtin, constant, is_builtin},
        },
        lexer::Token,
    },
};

impl Evaluator<'_, '_> {
    /// Evaluates one operand of a binary chain.
    ///
    /// Handles, in order:
    /// - numeric literals,
    /// - parenthesised expressions,
    /// - builtin function calls, whose argument is the next simple expression
    ///   only (`sin 2^2` is `sin(2)^2`),
    /// - builtin constants,
    /// - variable assignment and lookup.
    ///
    /// The rule is: `simple := number | "(" expression ")" | function simple
    /// | constant | name "=" expression | name`
    ///
    /// # Errors
    /// - `UnbalancedParentheses` if a group is not closed.
    /// - `UnexpectedToken` for tokens that cannot start an operand.
    /// - `UnexpectedEndOfInput` if the input ends where an operand is
    ///   required.
    /// - `UnknownVariable` when reading a name that was never assigned.
    pub(super) fn parse_simple(&mut self) -> EvalResult<f64> {
        let Some((token, position)) = self.advance() else {
            return Err(ParseError::UnexpectedEndOfInput.into());
        };

        match token {
            Token::Number(n) => Ok(*n),
            Token::LParen => {
                let value = self.parse()?;
                match self.advance() {
                    Some((Token::RParen, _)) => Ok(value),
                    _ => Err(ParseError::UnbalancedParentheses { position: *position }.into()),
                }
            },
            Token::Identifier(name) => self.parse_identifier(name, *position),
            other => Err(ParseError::UnexpectedToken { token:    other.to_string(),
                                                       position: *position, }.into()),
        }
    }

    /// Resolves an identifier that has already been consumed.
    ///
    /// Function and constant names are matched case-insensitively and take
    /// precedence over variables. A variable followed by `=` is an
    /// assignment: the right-hand side is a full expression, its value is
    /// stored immediately and also returned.
    fn parse_identifier(&mut self, name: &str, position: usize) -> EvalResult<f64> {
        if is_builtin(name) {
            let argument = self.parse_simple()?;
            return call_builtin(name, argument, position);
        }

        if let Some(value) = constant(name) {
            return Ok(value);
        }

        if let Some((Token::Equals, _)) = self.peek() {
            self.advance();
            let value = self.parse()?;
            self.env.set(name, value);
            debug!(variable = name, value, "assigned variable");
            return Ok(value);
        }

        self.env.get(name).ok_or_else(|| {
                               RuntimeError::UnknownVariable { name: name.to_string(),
                                                               position }.into()
                           })
    }
}
