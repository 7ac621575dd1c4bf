//! The 6x6 board grid.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{
    Digit, DigitSet, GridError, House, ParseGridError, Position,
    position::{BLOCK_COLS, BLOCK_ROWS, CELL_COUNT, SIDE},
};

/// A 6x6 grid of cells, each empty or holding a digit 1-6.
///
/// Cells are stored in row-major order. The grid makes no validity promise
/// by itself: a `Grid` may be empty, a partially filled puzzle, or a full
/// solution. Use [`Grid::is_consistent`] and [`Grid::is_solved`] to check
/// the constraint invariants.
///
/// # Text format
///
/// Grids parse from and display as six rows of digits, `_` (or `.` or `0`)
/// for empty cells, with whitespace ignored on input:
///
/// ```
/// use rokudoku_core::Grid;
///
/// let grid: Grid = "
///     123 456
///     456 123
///     231 564
///     564 231
///     312 645
///     645 312
/// "
/// .parse()
/// .unwrap();
/// assert!(grid.is_solved());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid([Option<Digit>; CELL_COUNT]);

impl Grid {
    /// The empty grid.
    pub const EMPTY: Self = Self([None; CELL_COUNT]);

    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Builds a grid from raw rows of cell values, where 0 denotes an empty
    /// cell and 1-6 a placed digit.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDigit`] if any value is greater than 6.
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::{Digit, Grid, Position};
    ///
    /// let grid = Grid::from_rows([
    ///     [1, 2, 3, 4, 5, 6],
    ///     [0; 6],
    ///     [0; 6],
    ///     [0; 6],
    ///     [0; 6],
    ///     [0; 6],
    /// ])
    /// .unwrap();
    /// assert_eq!(grid[Position::new(0, 2)], Some(Digit::D3));
    /// assert_eq!(grid[Position::new(1, 0)], None);
    /// ```
    pub fn from_rows(rows: [[u8; 6]; 6]) -> Result<Self, GridError> {
        let mut grid = Self::EMPTY;
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let pos = Position::new(row as u8, col as u8);
                let cell = match value {
                    0 => None,
                    _ => Some(Digit::try_from_value(value)?),
                };
                grid.set(pos, cell);
            }
        }
        Ok(grid)
    }

    /// Returns the grid as raw rows of cell values, 0 for empty cells.
    #[must_use]
    pub fn to_rows(&self) -> [[u8; 6]; 6] {
        let mut rows = [[0; 6]; 6];
        for pos in Position::ALL {
            if let Some(digit) = self.0[pos.index()] {
                rows[pos.row() as usize][pos.col() as usize] = digit.value();
            }
        }
        rows
    }

    /// Returns the cell at the given position.
    #[must_use]
    #[inline]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.0[pos.index()]
    }

    /// Sets the cell at the given position.
    #[inline]
    pub const fn set(&mut self, pos: Position, cell: Option<Digit>) {
        self.0[pos.index()] = cell;
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Returns the first empty cell in row-major order, if any.
    ///
    /// The backtracking search uses this to pick the next cell to fill, so
    /// the search explores positions in a deterministic order.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        self.0
            .iter()
            .position(Option::is_none)
            .map(Position::from_index)
    }

    /// Returns `true` if placing `digit` at `pos` would violate no
    /// constraint: the digit must not already appear anywhere in the same
    /// row, column, or 2x3 block.
    ///
    /// This is a pure predicate over the current cell contents; the cell at
    /// `pos` itself is scanned like any other, so placing a digit on top of
    /// itself reports `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// grid.set(Position::new(0, 0), Some(Digit::D3));
    ///
    /// // Same row
    /// assert!(!grid.is_valid_placement(Position::new(0, 5), Digit::D3));
    /// // Same column
    /// assert!(!grid.is_valid_placement(Position::new(5, 0), Digit::D3));
    /// // Same block
    /// assert!(!grid.is_valid_placement(Position::new(1, 2), Digit::D3));
    /// // Unconstrained
    /// assert!(grid.is_valid_placement(Position::new(2, 3), Digit::D3));
    /// ```
    #[must_use]
    pub fn is_valid_placement(&self, pos: Position, digit: Digit) -> bool {
        !self.row_contains(pos.row(), digit)
            && !self.col_contains(pos.col(), digit)
            && !self.block_contains(pos, digit)
    }

    fn row_contains(&self, row: u8, digit: Digit) -> bool {
        (0..SIDE).any(|col| self.get(Position::new(row, col)) == Some(digit))
    }

    fn col_contains(&self, col: u8, digit: Digit) -> bool {
        (0..SIDE).any(|row| self.get(Position::new(row, col)) == Some(digit))
    }

    fn block_contains(&self, pos: Position, digit: Digit) -> bool {
        let origin = pos.block_origin();
        (0..BLOCK_ROWS).any(|dr| {
            (0..BLOCK_COLS).any(|dc| {
                self.get(Position::new(origin.row() + dr, origin.col() + dc)) == Some(digit)
            })
        })
    }

    /// Returns the set of digits present in the given house.
    #[must_use]
    pub fn house_digits(&self, house: House) -> DigitSet {
        house
            .positions()
            .into_iter()
            .filter_map(|pos| self.get(pos))
            .collect()
    }

    /// Returns `true` if no house contains a duplicate digit.
    ///
    /// Empty cells are ignored, so any prefix of a valid fill is consistent.
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// grid.set(Position::new(0, 0), Some(Digit::D1));
    /// assert!(grid.is_consistent());
    ///
    /// grid.set(Position::new(0, 5), Some(Digit::D1));
    /// assert!(!grid.is_consistent());
    /// ```
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        House::ALL.into_iter().all(|house| {
            let mut seen = DigitSet::EMPTY;
            house
                .positions()
                .into_iter()
                .filter_map(|pos| self.get(pos))
                .all(|digit| seen.insert(digit))
        })
    }

    /// Returns `true` if the grid is a full valid solution: every cell holds
    /// a digit and every house contains all six digits.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        House::ALL
            .into_iter()
            .all(|house| self.house_digits(house) == DigitSet::ALL)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.0[pos.index()]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..SIDE {
                if col == BLOCK_COLS {
                    write!(f, " ")?;
                }
                match self.get(Position::new(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses a grid from text: digits `1`-`6` for filled cells, `_`, `.` or
    /// `0` for empty cells, whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::EMPTY;
        let mut index = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let cell = match c {
                '_' | '.' | '0' => None,
                '1'..='6' => Some(Digit::from_value(c as u8 - b'0')),
                _ => return Err(ParseGridError::UnexpectedCharacter { c }),
            };
            if index == CELL_COUNT {
                return Err(ParseGridError::WrongCellCount { found: index + 1 });
            }
            grid.set(Position::from_index(index), cell);
            index += 1;
        }
        if index != CELL_COUNT {
            return Err(ParseGridError::WrongCellCount { found: index });
        }
        Ok(grid)
    }
}
