use thiserror::Error;

use crate::expression::ExpressionError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Expression error: {0}")]
    ExpressionError(#[from] ExpressionError),
    #[error("Invalid input: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("No solvable puzzle found after {attempts} attempts")]
    NoSolvablePuzzle { attempts: usize },
}
