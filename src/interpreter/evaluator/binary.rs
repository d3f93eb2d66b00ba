use std::fmt;

use tracing::trace;

use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluator},
    lexer::Token,
};

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// Maps a token to its binary operator, or `None` for every other token
    /// (including `=` and parentheses).
    ///
    /// # Example
    /// ```
    /// use priocalc::interpreter::{evaluator::binary::BinaryOperator, lexer::Token};
    ///
    /// assert_eq!(BinaryOperator::from_token(&Token::Caret), Some(BinaryOperator::Pow));
    /// assert_eq!(BinaryOperator::from_token(&Token::Equals), None);
    /// ```
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            Token::Percent => Some(Self::Mod),
            Token::Caret => Some(Self::Pow),
            _ => None,
        }
    }

    /// Binding strength of the operator. Higher binds tighter.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Pow => 3,
        }
    }

    /// Returns `true` for `^`, which groups from the right.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// Applies the operator with IEEE-754 semantics.
    ///
    /// Division by zero yields infinity or NaN and NaN operands propagate.
    /// `%` is the truncated remainder, so the result takes the sign of the
    /// dividend.
    ///
    /// # Example
    /// ```
    /// use priocalc::interpreter::evaluator::binary::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Mod.apply(-7.0, 3.0), -1.0);
    /// assert_eq!(BinaryOperator::Div.apply(1.0, 0.0), f64::INFINITY);
    /// assert_eq!(BinaryOperator::Pow.apply(2.0, 10.0), 1024.0);
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Mod => left % right,
            Self::Pow => left.powf(right),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}

impl Evaluator<'_, '_> {
    /// Evaluates a chain of binary operators by precedence climbing.
    ///
    /// One simple expression is read first. While the next token is an
    /// operator binding tighter than `min_priority`, it is consumed and its
    /// right operand is evaluated by a recursive call that only accepts
    /// tighter operators. Left-associative operators pass their own priority
    /// down, so an equal operator ends the right operand and is folded into
    /// the left. `^` passes one less, so `2^3^2` groups as `2^(3^2)`.
    ///
    /// The rule is: `binary(min) := simple (op binary(priority(op)))*` where
    /// `priority(op) > min`.
    pub(super) fn parse_binary(&mut self, min_priority: u8) -> EvalResult<f64> {
        let mut left = self.parse_simple()?;

        loop {
            // Anything that is not a binary operator, including `)`, `=` and
            // the end of input, has priority 0 and ends the chain.
            let Some(op) = self.peek()
                               .and_then(|(token, _)| BinaryOperator::from_token(token))
            else {
                return Ok(left);
            };
            let priority = op.priority();
            if priority <= min_priority {
                return Ok(left);
            }
            self.advance();

            let right_min = if op.is_right_associative() { priority - 1 } else { priority };
            let right = self.parse_binary(right_min)?;

            let result = op.apply(left, right);
            trace!(%op, left, right, result, "applied binary operator");
            left = result;
        }
    }
}
