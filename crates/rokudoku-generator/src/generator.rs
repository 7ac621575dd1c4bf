//! Puzzle generation: solution filling and uniqueness-preserving clue
//! removal.

use log::debug;
use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64;
use rokudoku_core::{Digit, Grid, Position};

use crate::{PuzzleSeed, count_solutions};

/// Tunable limits for puzzle generation.
///
/// The defaults match the engine's intended difficulty: removal stops after
/// three failed removal attempts or once only eleven clues remain,
/// whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Fewest clues a generated puzzle may have. Removal never takes the
    /// grid below this count.
    pub min_clues: usize,
    /// How many uniqueness-breaking removal attempts are tolerated before
    /// the puzzle is considered done.
    pub removal_rounds: u32,
    /// Completion-count cap for the uniqueness check during removal.
    /// Two is sufficient (the check only distinguishes one completion from
    /// more than one); values below 2 are treated as 2.
    pub solution_cap: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_clues: 11,
            removal_rounds: 3,
            solution_cap: 2,
        }
    }
}

/// One accepted placement during solution construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The cell that was filled.
    pub position: Position,
    /// The digit placed there.
    pub digit: Digit,
}

/// A generated puzzle, its solution, and the seed that produced both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle grid handed to the player: at least `min_clues` clues,
    /// exactly one completion.
    pub problem: Grid,
    /// The full solution the problem was carved from.
    pub solution: Grid,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
    /// Every placement accepted while constructing the solution, in order,
    /// including placements later undone by backtracking. Useful for
    /// replaying or visualizing the search; not needed for gameplay.
    pub path: Vec<Placement>,
}

/// Generates uniquely-solvable 6x6 puzzles.
///
/// A generator holds only configuration. Every call builds fresh grid and
/// RNG state, so one generator value can serve any number of requests, from
/// any number of threads, without shared state between them.
///
/// # Examples
///
/// ```
/// use rokudoku_generator::{PuzzleGenerator, has_unique_solution};
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate();
///
/// assert!(puzzle.solution.is_solved());
/// assert!(puzzle.problem.filled_count() >= 11);
/// assert!(has_unique_solution(&puzzle.problem));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Creates a generator with a custom configuration.
    #[must_use]
    pub const fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the generator's configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle named by `seed`.
    ///
    /// The same seed and configuration always produce the same
    /// [`GeneratedPuzzle`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_generator::{PuzzleGenerator, PuzzleSeed};
    ///
    /// let generator = PuzzleGenerator::new();
    /// let seed = PuzzleSeed::from_phrase("replay me");
    /// assert_eq!(generator.generate_with_seed(seed), generator.generate_with_seed(seed));
    /// ```
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();

        let mut grid = Grid::new();
        let mut path = Vec::new();
        let filled = fill_solution(&mut grid, &mut rng, &mut path);
        assert!(filled, "an empty board always has a completion");
        let solution = grid;
        debug!("filled solution in {} placements", path.len());

        self.remove_clues(&mut grid, &mut rng);
        debug!("carved puzzle down to {} clues", grid.filled_count());

        GeneratedPuzzle {
            problem: grid,
            solution,
            seed,
            path,
        }
    }

    /// Removes clues from a solved grid while it stays uniquely solvable.
    ///
    /// Candidates are attempted in a shuffled order. A removal that leaves
    /// exactly one completion is kept; any other is reverted and consumes
    /// one round from the budget.
    fn remove_clues(&self, grid: &mut Grid, rng: &mut Pcg64) {
        let cap = self.config.solution_cap.max(2);
        let mut candidates: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|&pos| grid.get(pos).is_some())
            .collect();
        candidates.shuffle(rng);

        let mut rounds = self.config.removal_rounds;
        while rounds > 0 && grid.filled_count() > self.config.min_clues {
            let Some(pos) = candidates.pop() else {
                break;
            };
            let Some(removed) = grid.get(pos) else {
                continue;
            };
            grid.set(pos, None);
            if count_solutions(grid, cap) == 1 {
                debug!(
                    "removed clue {removed} at {pos}, {} clues left",
                    grid.filled_count()
                );
            } else {
                grid.set(pos, Some(removed));
                rounds -= 1;
                debug!("kept clue {removed} at {pos}, uniqueness would break ({rounds} rounds left)");
            }
        }
    }
}

/// Fills the grid into a full solution by randomized backtracking.
///
/// Cells are visited in row-major order; digits are tried in an order
/// shuffled by `rng`, which is the only source of variety between
/// solutions. Accepted placements are appended to `path` and stay there
/// even when backtracking later undoes them.
fn fill_solution(grid: &mut Grid, rng: &mut Pcg64, path: &mut Vec<Placement>) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if grid.is_valid_placement(pos, digit) {
            grid.set(pos, Some(digit));
            path.push(Placement {
                position: pos,
                digit,
            });
            if fill_solution(grid, rng, path) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rokudoku_core::House;

    use super::*;

    #[test]
    fn test_filled_solution_is_valid() {
        let mut rng = PuzzleSeed::from_phrase("fill").rng();
        let mut grid = Grid::new();
        let mut path = Vec::new();
        assert!(fill_solution(&mut grid, &mut rng, &mut path));

        assert!(grid.is_full());
        assert!(grid.is_solved());
        // Every row, column, and block holds each digit exactly once
        for house in House::ALL {
            assert_eq!(grid.house_digits(house).len(), 6);
        }
        // At least one placement per cell
        assert!(path.len() >= 36);
    }

    #[test]
    fn test_generated_puzzle_invariants() {
        let generator = PuzzleGenerator::new();
        let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("invariants"));

        assert!(puzzle.solution.is_solved());
        assert!(puzzle.problem.filled_count() >= 11);
        assert_eq!(count_solutions(&puzzle.problem, 2), 1);

        // The problem is the solution with some cells cleared
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem.get(pos) {
                assert_eq!(puzzle.solution.get(pos), Some(digit));
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_puzzle() {
        let generator = PuzzleGenerator::new();
        let seed = PuzzleSeed::from_phrase("replay");
        assert_eq!(
            generator.generate_with_seed(seed),
            generator.generate_with_seed(seed)
        );
    }

    #[test]
    fn test_different_seeds_vary() {
        let generator = PuzzleGenerator::new();
        let a = generator.generate_with_seed(PuzzleSeed::from_phrase("first"));
        let b = generator.generate_with_seed(PuzzleSeed::from_phrase("second"));
        assert_ne!(a.problem, b.problem);
    }

    #[test]
    fn test_min_clue_floor_is_respected() {
        let config = GeneratorConfig {
            min_clues: 30,
            ..GeneratorConfig::default()
        };
        let generator = PuzzleGenerator::with_config(config);
        let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("floor"));
        assert!(puzzle.problem.filled_count() >= 30);
        assert_eq!(count_solutions(&puzzle.problem, 2), 1);
    }

    #[test]
    fn test_zero_rounds_removes_nothing() {
        let config = GeneratorConfig {
            removal_rounds: 0,
            ..GeneratorConfig::default()
        };
        let generator = PuzzleGenerator::with_config(config);
        let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("no removal"));
        assert_eq!(puzzle.problem, puzzle.solution);
        assert_eq!(puzzle.problem.filled_count(), 36);
    }

    #[test]
    fn test_solution_cap_below_two_still_checks_uniqueness() {
        let config = GeneratorConfig {
            solution_cap: 0,
            ..GeneratorConfig::default()
        };
        let generator = PuzzleGenerator::with_config(config);
        let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("clamped cap"));
        assert_eq!(count_solutions(&puzzle.problem, 2), 1);
        assert!(puzzle.problem.filled_count() >= 11);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_any_seed_yields_unique_puzzle(bytes in proptest::array::uniform32(any::<u8>())) {
            let generator = PuzzleGenerator::new();
            let puzzle = generator.generate_with_seed(PuzzleSeed::from_bytes(bytes));
            prop_assert!(puzzle.solution.is_solved());
            prop_assert!(puzzle.problem.filled_count() >= 11);
            prop_assert_eq!(count_solutions(&puzzle.problem, 2), 1);
        }
    }
}
