//! Example demonstrating puzzle generation.
//!
//! Generates one or more puzzles and prints the seed, problem, and
//! solution for each. Pass a seed to regenerate a specific puzzle, or a
//! phrase to name one.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! cargo run --example generate_puzzle -- --count 3
//! cargo run --example generate_puzzle -- --seed <64 hex chars>
//! cargo run --example generate_puzzle -- --phrase "daily 2024-01-15"
//! ```
//!
//! Set `RUST_LOG=debug` to watch the clue-removal decisions.

use clap::Parser;
use rokudoku_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to regenerate, as 64 hexadecimal digits.
    #[arg(long, value_name = "SEED", conflicts_with_all = ["phrase", "count"])]
    seed: Option<PuzzleSeed>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "PHRASE", conflicts_with = "count")]
    phrase: Option<String>,

    /// Number of random puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::new();

    let seed = args
        .seed
        .or_else(|| args.phrase.as_deref().map(PuzzleSeed::from_phrase));
    if let Some(seed) = seed {
        print_puzzle(&generator.generate_with_seed(seed));
        return;
    }

    for i in 0..args.count {
        if i > 0 {
            println!();
        }
        print_puzzle(&generator.generate());
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Problem ({} clues):", puzzle.problem.filled_count());
    for line in puzzle.problem.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Solution:");
    for line in puzzle.solution.to_string().lines() {
        println!("  {line}");
    }
}
