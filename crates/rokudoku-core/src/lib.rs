//! Core data structures for the rokudoku puzzle engine.
//!
//! This crate provides the board model for a 6x6 number-place variant:
//! rows, columns, and six 2x3 blocks are the constrained regions, and each
//! must contain the digits 1-6 exactly once in a solution.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of the digits 1-6
//! - [`position`]: Board (row, column) coordinate type, including the chat
//!   coordinate text form (`"c1"`)
//! - [`digit_set`]: A small bitset of digits, for duplicate and
//!   completeness checks
//! - [`house`]: The 18 constrained regions (rows, columns, blocks)
//! - [`grid`]: The board itself, with placement validation and a text
//!   format
//! - [`error`]: Boundary error types for out-of-range coordinates, digits,
//!   and unparsable text
//!
//! # Examples
//!
//! ```
//! use rokudoku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D3));
//!
//! // 3 is now taken in row 0, column 0, and the top-left block
//! assert!(!grid.is_valid_placement(Position::new(0, 4), Digit::D3));
//! assert!(grid.is_valid_placement(Position::new(0, 4), Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod error;
pub mod grid;
pub mod house;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    error::{GridError, ParseGridError, ParsePositionError},
    grid::Grid,
    house::House,
    position::Position,
};
