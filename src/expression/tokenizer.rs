use std::fmt;

use log::debug;

use crate::expression::ast::Operator;
use crate::expression::errors::TokenizeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Number(i64),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Split an expression string into number, operator and parenthesis tokens.
///
/// Any character that is not a digit, operator or parenthesis is skipped,
/// whitespace included.
///
/// # Errors
///
/// Returns an error if no token could be extracted or if an integer literal
/// overflows `i64`.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_ascii_digit() {
            let mut end = start + c.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if !next.is_ascii_digit() {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }
            let literal = input.get(start..end).unwrap_or_default();
            let value = literal
                .parse::<i64>()
                .map_err(|_| TokenizeError::InvalidNumber(literal.to_string()))?;
            tokens.push(Token::Number(value));
        } else if c == '(' {
            tokens.push(Token::LeftParen);
        } else if c == ')' {
            tokens.push(Token::RightParen);
        } else if let Some(op) = Operator::from_symbol(c) {
            tokens.push(Token::Operator(op));
        }
    }

    if tokens.is_empty() {
        debug!("No tokens found in '{}'", input);
        return Err(TokenizeError::NoTokens(input.to_string()));
    }

    debug!("Tokenized '{}' into {} tokens", input, tokens.len());
    Ok(tokens)
}
