//! Error types for the board model.

use derive_more::{Display, Error};

/// Precondition violations at the untyped boundary of the board model.
///
/// The grid itself cannot hold an out-of-range coordinate or digit; these
/// errors are raised by the checked constructors before any grid state is
/// touched. Search outcomes (dead ends, capped solution counts) are ordinary
/// return values, never errors.
///
/// # Examples
///
/// ```
/// use rokudoku_core::{GridError, Position};
///
/// let err = Position::try_new(6, 0).unwrap_err();
/// assert_eq!(err, GridError::InvalidCoordinate { row: 6, col: 0 });
/// assert_eq!(err.to_string(), "coordinate out of range: row 6, column 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// A row or column index outside 0-5.
    #[display("coordinate out of range: row {row}, column {col}")]
    InvalidCoordinate {
        /// The offending row index.
        row: u8,
        /// The offending column index.
        col: u8,
    },
    /// A cell value outside 0-6 (0 denotes an empty cell).
    #[display("digit out of range: {value}")]
    InvalidDigit {
        /// The offending value.
        value: u8,
    },
}

/// Errors produced when parsing a grid from its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// A character that is not a digit 1-6, an empty-cell marker, or whitespace.
    #[display("unexpected character {c:?} in grid text")]
    UnexpectedCharacter {
        /// The offending character.
        c: char,
    },
    /// The text did not contain exactly 36 cells.
    #[display("expected 36 cells, found {found}")]
    WrongCellCount {
        /// The number of cells found.
        found: usize,
    },
}

/// Errors produced when parsing a board coordinate like `"c1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParsePositionError {
    /// The coordinate was not exactly two characters long.
    #[display("coordinate must be two characters, found {found}")]
    WrongLength {
        /// The number of characters found.
        found: usize,
    },
    /// The coordinate was not one letter a-f plus one digit 1-6.
    #[display("coordinate must pair a letter a-f with a digit 1-6")]
    BadCoordinate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GridError::InvalidCoordinate { row: 7, col: 2 }.to_string(),
            "coordinate out of range: row 7, column 2"
        );
        assert_eq!(
            GridError::InvalidDigit { value: 9 }.to_string(),
            "digit out of range: 9"
        );
        assert_eq!(
            ParseGridError::UnexpectedCharacter { c: 'x' }.to_string(),
            "unexpected character 'x' in grid text"
        );
        assert_eq!(
            ParseGridError::WrongCellCount { found: 35 }.to_string(),
            "expected 36 cells, found 35"
        );
        assert_eq!(
            ParsePositionError::WrongLength { found: 3 }.to_string(),
            "coordinate must be two characters, found 3"
        );
    }

    #[test]
    fn test_error_trait() {
        // All error types implement std::error::Error
        fn assert_error<E: std::error::Error>(_: E) {}
        assert_error(GridError::InvalidDigit { value: 0 });
        assert_error(ParseGridError::WrongCellCount { found: 0 });
        assert_error(ParsePositionError::BadCoordinate);
    }
}
