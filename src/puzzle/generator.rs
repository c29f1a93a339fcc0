use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::puzzle::dedup::SolutionDeduplicator;
use crate::solver::constants::{CARD_MAX, CARD_MIN, OPERAND_COUNT};
use crate::solver::{ExpressionSolver, SolverError};

/// A hand of four numbers together with its distinct solutions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    numbers: [i64; OPERAND_COUNT],
    solutions: Vec<String>,
    raw_solution_count: usize,
}

impl Puzzle {
    /// Solve `numbers` and keep one solution per canonical signature
    pub fn solve(numbers: [i64; OPERAND_COUNT]) -> Self {
        Self::solve_with(&ExpressionSolver::new(), numbers)
    }

    fn solve_with(solver: &ExpressionSolver, numbers: [i64; OPERAND_COUNT]) -> Self {
        let mut dedup = SolutionDeduplicator::new();
        dedup.extend(solver.find_solutions(&numbers));
        let raw_solution_count = dedup.raw_count();
        debug!(
            "{:?}: {} raw solutions, {} distinct",
            numbers,
            raw_solution_count,
            dedup.len()
        );
        Self {
            numbers,
            solutions: dedup.into_solutions(),
            raw_solution_count,
        }
    }

    pub fn numbers(&self) -> [i64; OPERAND_COUNT] {
        self.numbers
    }

    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    /// Number of solutions before equivalent ones were merged
    pub fn raw_solution_count(&self) -> usize {
        self.raw_solution_count
    }

    pub fn is_solvable(&self) -> bool {
        !self.solutions.is_empty()
    }

    pub fn into_solutions(self) -> Vec<String> {
        self.solutions
    }
}

/// Draws random hands until one of them has a solution
pub struct PuzzleGenerator<R: Rng> {
    rng: R,
    solver: ExpressionSolver,
}

impl PuzzleGenerator<ThreadRng> {
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl PuzzleGenerator<ChaCha8Rng> {
    /// Generator with a reproducible sequence of hands
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> PuzzleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            solver: ExpressionSolver::new(),
        }
    }

    /// Draw four numbers uniformly from 1..=13
    pub fn sample_numbers(&mut self) -> [i64; OPERAND_COUNT] {
        let mut numbers = [0; OPERAND_COUNT];
        for n in &mut numbers {
            *n = self.rng.gen_range(CARD_MIN..=CARD_MAX);
        }
        numbers
    }

    /// Keep drawing until a solvable hand comes up
    pub fn generate(&mut self) -> Puzzle {
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            if let Some(puzzle) = self.attempt() {
                info!("Generated {:?} after {} attempts", puzzle.numbers, attempts);
                return puzzle;
            }
        }
    }

    /// Like [`generate`](Self::generate) but gives up after `max_attempts` draws
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NoSolvablePuzzle`] if none of the drawn hands
    /// has a solution.
    pub fn generate_with_limit(&mut self, max_attempts: usize) -> Result<Puzzle, SolverError> {
        for attempt in 1..=max_attempts {
            if let Some(puzzle) = self.attempt() {
                info!("Generated {:?} after {} attempts", puzzle.numbers, attempt);
                return Ok(puzzle);
            }
        }
        Err(SolverError::NoSolvablePuzzle {
            attempts: max_attempts,
        })
    }

    fn attempt(&mut self) -> Option<Puzzle> {
        let numbers = self.sample_numbers();
        let puzzle = Puzzle::solve_with(&self.solver, numbers);
        if puzzle.is_solvable() {
            Some(puzzle)
        } else {
            debug!("{:?} has no solution, drawing again", numbers);
            None
        }
    }
}
