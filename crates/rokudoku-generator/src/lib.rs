//! Puzzle generation for the rokudoku engine.
//!
//! This crate turns the board model from [`rokudoku_core`] into playable
//! puzzles:
//!
//! 1. **Solution filling** - randomized backtracking fills an empty grid
//!    into a full valid solution. The digit order at each cell is drawn
//!    from a seeded PCG-64 stream, which is the only source of variety
//!    between puzzles.
//! 2. **Clue removal** - clues are removed in a shuffled order as long as
//!    the puzzle keeps exactly one completion, until a round budget is
//!    spent or a minimum clue floor is reached.
//! 3. **Solution counting** - [`count_solutions`] is the bounded
//!    uniqueness oracle behind removal, and doubles as a validator for
//!    player-submitted grids ([`has_unique_solution`] on a full grid is a
//!    validity check).
//!
//! Generation is synchronous and CPU-bound with no suspension points.
//! Callers embedding it in a request-serving system should dispatch it off
//! their scheduling thread and, if they need cancellation, run it in a
//! task they can abandon.
//!
//! # Examples
//!
//! ```
//! use rokudoku_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new();
//!
//! // Reproducible: a seed names one specific puzzle
//! let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("doctest"));
//! assert!(puzzle.problem.filled_count() >= 11);
//!
//! // Fresh puzzle every call
//! let other = generator.generate();
//! assert!(other.solution.is_solved());
//! ```

pub mod generator;
pub mod seed;
pub mod solver;

// Re-export commonly used types
pub use self::{
    generator::{GeneratedPuzzle, GeneratorConfig, Placement, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
    solver::{count_solutions, has_unique_solution},
};
