//! Bounded backtracking search over grid completions.

use rokudoku_core::{Digit, Grid};

/// Search bookkeeping threaded through the recursion.
#[derive(Debug)]
struct SearchState {
    count: usize,
    cap: usize,
}

/// Counts completions of `grid` into full valid solutions, stopping once
/// `cap` completions have been found.
///
/// The search fills empty cells in row-major order, trying digits 1-6 in
/// ascending order, and backtracks on dead ends. It is a uniqueness oracle,
/// not an enumerator: above the cap the exact completion count is
/// unknowable from the result, and a cap of 2 is all that distinguishing
/// "unique" from "not unique" requires.
///
/// A grid whose existing clues already conflict has no completions, so the
/// result is 0. The caller's grid is never modified; the search runs on an
/// internal copy.
///
/// # Examples
///
/// ```
/// use rokudoku_generator::count_solutions;
/// use rokudoku_core::Grid;
///
/// // An empty board has a vast number of completions; the cap bounds the
/// // search effort
/// assert_eq!(count_solutions(&Grid::EMPTY, 2), 2);
/// assert_eq!(count_solutions(&Grid::EMPTY, 5), 5);
/// ```
#[must_use]
pub fn count_solutions(grid: &Grid, cap: usize) -> usize {
    if cap == 0 || !grid.is_consistent() {
        return 0;
    }
    let mut scratch = *grid;
    let mut state = SearchState { count: 0, cap };
    count_completions(&mut scratch, &mut state);
    state.count
}

fn count_completions(grid: &mut Grid, state: &mut SearchState) {
    let Some(pos) = grid.first_empty() else {
        state.count += 1;
        return;
    };
    for digit in Digit::ALL {
        if grid.is_valid_placement(pos, digit) {
            grid.set(pos, Some(digit));
            count_completions(grid, state);
            grid.set(pos, None);
            if state.count >= state.cap {
                return;
            }
        }
    }
}

/// Returns `true` if `grid` has exactly one completion.
///
/// For a full grid this is a validity check: a solved grid is its own
/// single completion, while a full grid with a conflict has none.
///
/// # Examples
///
/// ```
/// use rokudoku_generator::has_unique_solution;
/// use rokudoku_core::Grid;
///
/// assert!(!has_unique_solution(&Grid::EMPTY));
/// ```
#[must_use]
pub fn has_unique_solution(grid: &Grid) -> bool {
    count_solutions(grid, 2) == 1
}

#[cfg(test)]
mod tests {
    use rokudoku_core::Position;

    use super::*;

    const SOLVED: &str = "
        123 456
        456 123
        231 564
        564 231
        312 645
        645 312
    ";

    fn solved() -> Grid {
        SOLVED.parse().unwrap()
    }

    #[test]
    fn test_solved_grid_counts_once() {
        assert_eq!(count_solutions(&solved(), 2), 1);
        assert_eq!(count_solutions(&solved(), 100), 1);
        assert!(has_unique_solution(&solved()));
    }

    #[test]
    fn test_empty_grid_hits_the_cap() {
        assert_eq!(count_solutions(&Grid::EMPTY, 2), 2);
        assert_eq!(count_solutions(&Grid::EMPTY, 7), 7);
        assert!(!has_unique_solution(&Grid::EMPTY));
    }

    #[test]
    fn test_single_missing_cell_is_unique() {
        let mut grid = solved();
        grid.set(Position::new(2, 2), None);
        assert_eq!(count_solutions(&grid, 5), 1);
        assert!(has_unique_solution(&grid));
    }

    #[test]
    fn test_swappable_rectangle_has_two_completions() {
        // Clearing the 1/4 rectangle spanning rows 0-1 and columns 0 and 3
        // leaves two completions: the original and the one with 1 and 4
        // swapped (rows, columns, and blocks all still work out).
        let mut grid = solved();
        for pos in [
            Position::new(0, 0),
            Position::new(0, 3),
            Position::new(1, 0),
            Position::new(1, 3),
        ] {
            grid.set(pos, None);
        }
        assert_eq!(count_solutions(&grid, 2), 2);
        assert_eq!(count_solutions(&grid, 10), 2);
        assert!(!has_unique_solution(&grid));
    }

    #[test]
    fn test_conflicting_clues_have_no_completion() {
        let mut grid = Grid::EMPTY;
        grid.set(Position::new(0, 0), Some(Digit::D1));
        grid.set(Position::new(0, 5), Some(Digit::D1));
        assert_eq!(count_solutions(&grid, 2), 0);
        assert!(!has_unique_solution(&grid));
    }

    #[test]
    fn test_invalid_full_grid_has_no_completion() {
        let mut grid = solved();
        // Duplicate a digit within row 0
        grid.set(Position::new(0, 0), Some(Digit::D6));
        assert!(grid.is_full());
        assert_eq!(count_solutions(&grid, 2), 0);
    }

    #[test]
    fn test_zero_cap_searches_nothing() {
        assert_eq!(count_solutions(&solved(), 0), 0);
    }

    #[test]
    fn test_caller_grid_is_untouched() {
        let grid = solved();
        let before = grid;
        let _ = count_solutions(&grid, 10);
        assert_eq!(grid, before);
    }
}
