use thiserror::Error;

/// Errors that can occur while validating a hand of numbers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Expected {expected} numbers, got {actual}")]
    WrongOperandCount { expected: usize, actual: usize },
    #[error("Number {value} is outside the range {min}..={max}")]
    OperandOutOfRange { value: i64, min: i64, max: i64 },
}
