use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::{ExpressionError, ParseError};
use crate::expression::tokenizer::{Token, tokenize};

/// Parse an arithmetic expression string into a raw AST.
///
/// Grammar, left-associative with the usual precedence:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := NUMBER | '(' expression ')'
/// ```
///
/// # Errors
///
/// Returns an error if the input holds no tokens or the tokens do not form a
/// complete expression.
pub fn parse(input: &str) -> Result<Expression, ExpressionError> {
    let tokens = tokenize(input)?;
    let expr = parse_tokens(&tokens)?;
    debug!("Parsed '{}' as {}", input, expr);
    Ok(expr)
}

/// # Errors
///
/// Returns an error if the tokens do not form exactly one expression.
pub fn parse_tokens(tokens: &[Token]) -> Result<Expression, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::UnexpectedEndOfInput);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_expression()?;

    if parser.pos < tokens.len() {
        return Err(ParseError::TrailingTokens {
            position: parser.pos,
        });
    }
    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consume the current token if it is one of `ops`
    fn take_operator(&mut self, ops: [Operator; 2]) -> Option<Operator> {
        match self.current() {
            Some(Token::Operator(op)) if ops.contains(&op) => {
                self.advance();
                Some(op)
            }
            _ => None,
        }
    }

    fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_term()?;
        while let Some(op) = self.take_operator([Operator::Add, Operator::Sub]) {
            let right = self.parse_term()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_factor()?;
        while let Some(op) = self.take_operator([Operator::Mul, Operator::Div]) {
            let right = self.parse_factor()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expression, ParseError> {
        let token = self.current().ok_or(ParseError::UnexpectedEndOfInput)?;

        match token {
            Token::Number(n) => {
                self.advance();
                Ok(Expression::Number(n))
            }
            Token::LeftParen => {
                let open = self.pos;
                self.advance(); // consume (
                let inner = self.parse_expression()?;
                match self.current() {
                    Some(Token::RightParen) => {
                        self.advance();
                        Ok(inner)
                    }
                    None => Err(ParseError::UnmatchedParen { position: open }),
                    Some(other) => Err(ParseError::UnexpectedToken {
                        token: other,
                        position: self.pos,
                    }),
                }
            }
            other => Err(ParseError::UnexpectedToken {
                token: other,
                position: self.pos,
            }),
        }
    }
}
