//! Reach24 - a solver and puzzle generator for the 24 game
//!
//! Four numbers between 1 and 13 must be combined with `+ - * /` into an
//! expression equal to 24, using exact integer arithmetic only. This library
//! finds every such expression and collapses the ones that differ only by
//! reordering commutative operands or re-associating chains into a single
//! representative.

pub mod expression;
pub mod puzzle;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{CanonicalExpr, Expression, ExpressionError, normalize};
pub use puzzle::{Puzzle, PuzzleGenerator, SolutionDeduplicator, deduplicate};
pub use solver::{ExpressionSolver, SolverError};
pub use utils::{UtilsError, validate_numbers};

/// Find every expression over `numbers` that evaluates to 24
///
/// Solutions are de-duplicated by exact text only; see [`solve_distinct`] for
/// one solution per equivalence class.
///
/// # Errors
///
/// This function will return an error if:
/// * `numbers` does not hold exactly four values
/// * Any value lies outside 1..=13
///
/// # Examples
///
/// ```
/// use reach24::solve;
///
/// let solutions = solve(&[1, 2, 3, 4]).unwrap_or_default();
/// assert!(solutions.iter().any(|s| s == "1 * 2 * 3 * 4"));
/// ```
pub fn solve(numbers: &[i64]) -> Result<Vec<String>, SolverError> {
    validate_numbers(numbers)?;

    let solver = ExpressionSolver::new();
    Ok(solver.find_solutions(numbers))
}

/// Solve a hand and keep one solution per canonical signature
///
/// # Errors
///
/// Returns an error if `numbers` is not a valid hand (see [`solve`]).
pub fn solve_distinct(numbers: &[i64]) -> Result<Puzzle, SolverError> {
    let hand = validate_numbers(numbers)?;
    Ok(Puzzle::solve(hand))
}

/// Draw random hands until one is solvable and return it with its solutions
pub fn generate_puzzle() -> Puzzle {
    PuzzleGenerator::from_entropy().generate()
}
