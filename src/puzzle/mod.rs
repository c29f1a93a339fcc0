//! Deduplication of raw solutions and generation of solvable puzzles

mod dedup;
mod generator;

pub use dedup::{SolutionDeduplicator, deduplicate};
pub use generator::{Puzzle, PuzzleGenerator};
