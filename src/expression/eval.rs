use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

/// Apply `op` to two integers, refusing anything that would leave the integers
///
/// # Errors
///
/// Returns an error on division by zero, on a division with a remainder, or on
/// overflow.
pub fn apply_exact(op: Operator, left: i64, right: i64) -> Result<i64, ExpressionError> {
    match op {
        Operator::Add => left.checked_add(right).ok_or(ExpressionError::Overflow),
        Operator::Sub => left.checked_sub(right).ok_or(ExpressionError::Overflow),
        Operator::Mul => left.checked_mul(right).ok_or(ExpressionError::Overflow),
        Operator::Div => {
            if right == 0 {
                return Err(ExpressionError::DivisionByZero);
            }
            if left.checked_rem(right).ok_or(ExpressionError::Overflow)? != 0 {
                return Err(ExpressionError::InexactDivision {
                    dividend: left,
                    divisor: right,
                });
            }
            left.checked_div(right).ok_or(ExpressionError::Overflow)
        }
    }
}

impl Expression {
    /// Evaluate the tree with exact integer arithmetic
    ///
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - A division that leaves a remainder
    /// - An operation that overflows `i64`
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Binary(op, l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                apply_exact(*op, left, right)
            }
        };

        if let Err(e) = &result {
            debug!("Evaluation of {} failed: {}", self, e);
        }

        result
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::apply_exact;
    use crate::expression::ast::Operator;
    use crate::expression::errors::ExpressionError;

    #[test]
    fn test_apply_exact_basic() {
        assert_eq!(apply_exact(Operator::Add, 2, 3), Ok(5));
        assert_eq!(apply_exact(Operator::Sub, 5, 8), Ok(-3));
        assert_eq!(apply_exact(Operator::Mul, 4, 6), Ok(24));
        assert_eq!(apply_exact(Operator::Div, 24, 6), Ok(4));
        assert_eq!(apply_exact(Operator::Div, -12, 4), Ok(-3));
    }

    #[test]
    fn test_apply_exact_rejects_remainders() {
        assert_eq!(
            apply_exact(Operator::Div, 8, 3),
            Err(ExpressionError::InexactDivision {
                dividend: 8,
                divisor: 3
            })
        );
        assert_eq!(
            apply_exact(Operator::Div, 1, 0),
            Err(ExpressionError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_exact_overflow() {
        assert_eq!(
            apply_exact(Operator::Mul, i64::MAX, 2),
            Err(ExpressionError::Overflow)
        );
        assert_eq!(
            apply_exact(Operator::Div, i64::MIN, -1),
            Err(ExpressionError::Overflow)
        );
    }
}
