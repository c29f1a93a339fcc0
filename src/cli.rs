use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use reach24::{ExpressionSolver, Puzzle, PuzzleGenerator, normalize, validate_numbers};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Reach24 - solve and generate 24-game puzzles
#[derive(Parser, Debug)]
#[command(name = "reach24")]
#[command(about = "Find every distinct way to reach 24 with four numbers")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a hand of four numbers between 1 and 13
    Solve {
        #[arg(num_args = 4, required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,

        /// Print every raw solution instead of one per equivalence class
        #[arg(long)]
        raw: bool,
    },
    /// Generate a random solvable puzzle
    Generate {
        /// Seed for a reproducible puzzle
        #[arg(long)]
        seed: Option<u64>,

        /// Give up after this many unsolvable draws
        #[arg(long)]
        max_attempts: Option<usize>,
    },
    /// Print the canonical signature of an expression
    Normalize { expression: String },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

fn print_solutions(solutions: &[String]) {
    if solutions.is_empty() {
        warn!("No solution found");
        println!("No solution.");
    }
    for solution in solutions {
        println!("{}", solution);
    }
}

fn run_solve(numbers: &[i64], raw: bool) -> Result<()> {
    let hand = validate_numbers(numbers).context("Invalid hand")?;

    if raw {
        let solver = ExpressionSolver::new();
        print_solutions(&solver.find_solutions(&hand));
        return Ok(());
    }

    let puzzle = Puzzle::solve(hand);
    info!(
        "{} raw solutions, {} distinct",
        puzzle.raw_solution_count(),
        puzzle.solutions().len()
    );
    print_solutions(puzzle.solutions());
    Ok(())
}

fn run_generate(seed: Option<u64>, max_attempts: Option<usize>) -> Result<()> {
    let puzzle = match (seed, max_attempts) {
        (Some(seed), Some(limit)) => PuzzleGenerator::seeded(seed).generate_with_limit(limit)?,
        (Some(seed), None) => PuzzleGenerator::seeded(seed).generate(),
        (None, Some(limit)) => PuzzleGenerator::from_entropy().generate_with_limit(limit)?,
        (None, None) => PuzzleGenerator::from_entropy().generate(),
    };

    let numbers: Vec<String> = puzzle.numbers().iter().map(|n| n.to_string()).collect();
    println!("{}", numbers.join(" "));
    print_solutions(puzzle.solutions());
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Command::Solve { numbers, raw } => run_solve(&numbers, raw),
        Command::Generate { seed, max_attempts } => run_generate(seed, max_attempts),
        Command::Normalize { expression } => {
            let signature = normalize(&expression)
                .with_context(|| format!("Cannot normalize '{}'", expression))?;
            println!("{}", signature);
            Ok(())
        }
    }
}
