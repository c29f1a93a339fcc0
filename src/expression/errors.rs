use thiserror::Error;

use crate::expression::tokenizer::Token;

/// Errors raised while splitting an expression string into tokens
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenizeError {
    #[error("No arithmetic tokens found in '{0}'")]
    NoTokens(String),
    #[error("Integer literal does not fit in 64 bits: {0}")]
    InvalidNumber(String),
}

/// Errors raised when a token stream does not match the expression grammar
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("Unmatched '(' at token {position}")]
    UnmatchedParen { position: usize },
    #[error("Unexpected token '{token}' at token {position}")]
    UnexpectedToken { token: Token, position: usize },
    #[error("Trailing tokens starting at token {position}")]
    TrailingTokens { position: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Tokenize error: {0}")]
    Tokenize(#[from] TokenizeError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Inexact division: {dividend} / {divisor}")]
    InexactDivision { dividend: i64, divisor: i64 },
    #[error("Arithmetic overflow")]
    Overflow,
}
