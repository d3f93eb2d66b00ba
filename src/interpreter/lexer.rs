use std::fmt;

use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of an expression.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `42` or a sign-merged
    /// `-2`.
    #[regex(r"-?[0-9]+", parse_number)]
    #[regex(r"-?[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"-?\.[0-9]+", parse_number)]
    Number(f64),
    /// Identifier tokens; variable, function or constant names such as `x`,
    /// `sin` or `pi`.
    #[regex(r"[A-Za-z][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any other run of non-whitespace characters. Never produced by the
    /// derived lexer itself; [`tokenize`] folds unmatched input into it.
    Unknown(String),
}

impl Token {
    /// Returns `true` for the operator tokens `+ - * / % ^ =`.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self,
                 Self::Plus
                 | Self::Minus
                 | Self::Star
                 | Self::Slash
                 | Self::Percent
                 | Self::Caret
                 | Self::Equals)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(s) | Self::Unknown(s) => write!(f, "{s}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::Equals => write!(f, "="),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Converts source text into tokens paired with their byte offsets.
///
/// Scanning never fails: characters the lexer does not recognize are grouped
/// into [`Token::Unknown`] runs and left for the evaluator to reject. The
/// scanned tokens then go through [`normalize_unary_minus`].
///
/// # Example
/// ```
/// use priocalc::interpreter::lexer::{Token, tokenize};
///
/// assert!(tokenize("   ").is_empty());
///
/// let tokens: Vec<Token> = tokenize("-x").into_iter().map(|(t, _)| t).collect();
/// assert_eq!(tokens,
///            vec![Token::Number(-1.0), Token::Star, Token::Identifier("x".into())]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens: Vec<(Token, usize)> = Vec::new();
    let mut unknown_end = None;
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(tok) => tokens.push((tok, span.start)),
            Err(()) => {
                // Adjacent unmatched characters form one opaque run.
                if unknown_end == Some(span.start)
                   && let Some((Token::Unknown(run), _)) = tokens.last_mut()
                {
                    run.push_str(lexer.slice());
                } else {
                    tokens.push((Token::Unknown(lexer.slice().to_string()), span.start));
                }
                unknown_end = Some(span.end);
            },
        }
    }

    normalize_unary_minus(tokens)
}

/// Resolves whether each `-` means negation or subtraction.
///
/// The scanner cannot tell the two apart, so the decision is made here from
/// the preceding token:
/// - a `-` that starts the input or follows `(` becomes `-1 *`;
/// - a sign-merged literal such as `-3` that follows anything other than `(`
///   or an operator is split back into `-` and `3`.
///
/// # Example
/// ```
/// use priocalc::interpreter::lexer::{Token, normalize_unary_minus};
///
/// let scanned = vec![(Token::Number(2.0), 0), (Token::Number(-3.0), 1)];
/// let tokens: Vec<Token> = normalize_unary_minus(scanned).into_iter().map(|(t, _)| t).collect();
/// assert_eq!(tokens, vec![Token::Number(2.0), Token::Minus, Token::Number(3.0)]);
/// ```
#[must_use]
pub fn normalize_unary_minus(tokens: Vec<(Token, usize)>) -> Vec<(Token, usize)> {
    let mut normalized: Vec<(Token, usize)> = Vec::with_capacity(tokens.len());

    for (token, position) in tokens {
        let previous = normalized.last().map(|(tok, _)| tok);
        match token {
            Token::Minus if matches!(previous, None | Some(Token::LParen)) => {
                normalized.push((Token::Number(-1.0), position));
                normalized.push((Token::Star, position));
            },
            Token::Number(n)
                if n.is_sign_negative()
                   && previous.is_some_and(|tok| *tok != Token::LParen && !tok.is_operator()) =>
            {
                normalized.push((Token::Minus, position));
                normalized.push((Token::Number(-n), position + 1));
            },
            tok => normalized.push((tok, position)),
        }
    }

    normalized
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
