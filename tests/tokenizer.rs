use priocalc::interpreter::lexer::{Token, tokenize};

fn kinds(src: &str) -> Vec<Token> {
    tokenize(src).into_iter().map(|(token, _)| token).collect()
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

#[test]
fn blank_input_has_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   ").is_empty());
    assert!(tokenize("\t\n ").is_empty());
}

#[test]
fn scans_numbers_identifiers_and_operators() {
    assert_eq!(kinds("x1_a = 3.25 * (.5 + 2) ^ y % 4 / z"),
               vec![ident("x1_a"),
                    Token::Equals,
                    Token::Number(3.25),
                    Token::Star,
                    Token::LParen,
                    Token::Number(0.5),
                    Token::Plus,
                    Token::Number(2.0),
                    Token::RParen,
                    Token::Caret,
                    ident("y"),
                    Token::Percent,
                    Token::Number(4.0),
                    Token::Slash,
                    ident("z")]);
}

#[test]
fn records_byte_offsets() {
    let positions: Vec<usize> = tokenize("ab + 12").into_iter().map(|(_, p)| p).collect();
    assert_eq!(positions, vec![0, 3, 5]);
}

#[test]
fn leading_minus_becomes_multiplication() {
    assert_eq!(kinds("-(2)"),
               vec![Token::Number(-1.0),
                    Token::Star,
                    Token::LParen,
                    Token::Number(2.0),
                    Token::RParen]);
}

#[test]
fn minus_after_paren_becomes_multiplication() {
    assert_eq!(kinds("7 +(- 4)"),
               vec![Token::Number(7.0),
                    Token::Plus,
                    Token::LParen,
                    Token::Number(-1.0),
                    Token::Star,
                    Token::Number(4.0),
                    Token::RParen]);
}

#[test]
fn merged_literal_after_operand_is_split() {
    assert_eq!(kinds("5-3"), vec![Token::Number(5.0), Token::Minus, Token::Number(3.0)]);
    assert_eq!(kinds("x-3"), vec![ident("x"), Token::Minus, Token::Number(3.0)]);
    assert_eq!(kinds("(1)-1"),
               vec![Token::LParen,
                    Token::Number(1.0),
                    Token::RParen,
                    Token::Minus,
                    Token::Number(1.0)]);
}

#[test]
fn merged_literal_after_operator_or_paren_is_kept() {
    assert_eq!(kinds("-3"), vec![Token::Number(-3.0)]);
    assert_eq!(kinds("(-3)"), vec![Token::LParen, Token::Number(-3.0), Token::RParen]);
    assert_eq!(kinds("2*-3"), vec![Token::Number(2.0), Token::Star, Token::Number(-3.0)]);
    assert_eq!(kinds("y=-3"), vec![ident("y"), Token::Equals, Token::Number(-3.0)]);
}

#[test]
fn binary_minus_is_left_alone() {
    assert_eq!(kinds("4 - x"), vec![Token::Number(4.0), Token::Minus, ident("x")]);
}

#[test]
fn unrecognized_runs_pass_through() {
    assert_eq!(kinds("2 $$ 3"),
               vec![Token::Number(2.0), Token::Unknown("$$".to_string()), Token::Number(3.0)]);
    assert_eq!(kinds("1 # #"),
               vec![Token::Number(1.0),
                    Token::Unknown("#".to_string()),
                    Token::Unknown("#".to_string())]);
}
