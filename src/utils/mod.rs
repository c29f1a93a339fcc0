//! Input validation helpers

mod errors;
mod validation;

pub use errors::UtilsError;
pub use validation::validate_numbers;

#[cfg(test)]
mod tests;
