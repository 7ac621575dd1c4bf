//! Board digit representation.

use std::fmt::{self, Display};

use crate::GridError;

/// A board digit in the range 1-6.
///
/// This enum provides type-safe representation of the digits placeable on a
/// 6x6 board, preventing invalid values at compile time. Each variant
/// corresponds to exactly one digit value.
///
/// # Examples
///
/// ```
/// use rokudoku_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Create from a u8 value
/// let digit = Digit::from_value(4);
/// assert_eq!(digit, Digit::D4);
///
/// // Iterate over all digits
/// for digit in Digit::ALL {
///     println!("{}", digit);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
}

impl Digit {
    /// Array containing all digits from 1 to 6.
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::Digit;
    ///
    /// assert_eq!(Digit::ALL.len(), 6);
    /// assert_eq!(Digit::ALL[0], Digit::D1);
    /// assert_eq!(Digit::ALL[5], Digit::D6);
    /// ```
    pub const ALL: [Self; 6] = [Self::D1, Self::D2, Self::D3, Self::D4, Self::D5, Self::D6];

    /// Creates a digit from a u8 value in the range 1-6.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-6. Use [`Digit::try_from_value`]
    /// when the value comes from an untrusted source.
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::Digit;
    ///
    /// let digit = Digit::from_value(5);
    /// assert_eq!(digit, Digit::D5);
    /// ```
    ///
    /// ```should_panic
    /// use rokudoku_core::Digit;
    ///
    /// // This will panic
    /// let _ = Digit::from_value(0);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match Self::try_from_value(value) {
            Ok(digit) => digit,
            Err(_) => panic!("Invalid digit value: {value}"),
        }
    }

    /// Creates a digit from a u8 value, rejecting values outside 1-6.
    ///
    /// This is the checked boundary constructor: player input and other raw
    /// integers enter the typed board model through it.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDigit`] if `value` is not in the range 1-6.
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::{Digit, GridError};
    ///
    /// assert_eq!(Digit::try_from_value(6), Ok(Digit::D6));
    /// assert_eq!(Digit::try_from_value(7), Err(GridError::InvalidDigit { value: 7 }));
    /// ```
    pub const fn try_from_value(value: u8) -> Result<Self, GridError> {
        match value {
            1 => Ok(Self::D1),
            2 => Ok(Self::D2),
            3 => Ok(Self::D3),
            4 => Ok(Self::D4),
            5 => Ok(Self::D5),
            6 => Ok(Self::D6),
            _ => Err(GridError::InvalidDigit { value }),
        }
    }

    /// Returns the numeric value of this digit (1-6).
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::Digit;
    ///
    /// assert_eq!(Digit::D1.value(), 1);
    /// assert_eq!(Digit::D6.value(), 6);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
