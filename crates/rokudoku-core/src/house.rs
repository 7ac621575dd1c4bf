//! Houses: the constrained regions of the board.

use crate::{
    Position,
    position::{BLOCK_COLS, BLOCK_ROWS, SIDE},
};

/// A board house (row, column, or 2x3 block).
///
/// A solved grid contains each digit 1-6 exactly once in every house.
///
/// # Examples
///
/// ```
/// use rokudoku_core::{House, Position};
///
/// let row = House::Row { row: 2 };
/// assert_eq!(row.positions()[0], Position::new(2, 0));
///
/// // 6 rows + 6 columns + 6 blocks
/// assert_eq!(House::ALL.len(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its index (0-5).
    Row {
        /// Row index (0-5).
        row: u8,
    },
    /// A column identified by its index (0-5).
    Column {
        /// Column index (0-5).
        col: u8,
    },
    /// A 2x3 block identified by its index (0-5, left to right, top to bottom).
    Block {
        /// Block index (0-5).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-5).
    pub const ROWS: [Self; 6] = {
        let mut rows = [Self::Row { row: 0 }; 6];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 6 {
            rows[i] = Self::Row { row: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-5).
    pub const COLUMNS: [Self; 6] = {
        let mut columns = [Self::Column { col: 0 }; 6];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 6 {
            columns[i] = Self::Column { col: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all blocks (0-5).
    pub const BLOCKS: [Self; 6] = {
        let mut blocks = [Self::Block { index: 0 }; 6];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 6 {
            blocks[i] = Self::Block { index: i as u8 };
            i += 1;
        }
        blocks
    };

    /// Array containing all houses in row, column, block order.
    pub const ALL: [Self; 18] = {
        let mut all = [Self::Row { row: 0 }; 18];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 6 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 6] = Self::Column { col: i as u8 };
            all[i + 12] = Self::Block { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the six positions contained in this house, in reading order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::{House, Position};
    ///
    /// let block = House::Block { index: 3 };
    /// let positions = block.positions();
    /// assert_eq!(positions[0], Position::new(2, 3));
    /// assert_eq!(positions[5], Position::new(3, 5));
    /// ```
    #[must_use]
    pub fn positions(self) -> [Position; 6] {
        let mut positions = [Position::new(0, 0); 6];
        for (i, slot) in positions.iter_mut().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            *slot = match self {
                House::Row { row } => Position::new(row, i),
                House::Column { col } => Position::new(i, col),
                House::Block { index } => {
                    let origin_row = (index / 2) * BLOCK_ROWS;
                    let origin_col = (index % 2) * BLOCK_COLS;
                    Position::new(origin_row + i / BLOCK_COLS, origin_col + i % BLOCK_COLS)
                }
            };
        }
        positions
    }
}
