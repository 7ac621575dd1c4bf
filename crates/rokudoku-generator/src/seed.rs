//! Seeds for reproducible puzzle generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DisplayDerive, Error};
use rand::{RngCore as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed for the puzzle generator's random stream.
///
/// A seed fully determines the generated puzzle: the same seed always
/// produces the same solution, the same removal order, and therefore the
/// same problem grid. Seeds display as and parse from 64 hexadecimal
/// digits, so they can be logged, shared, and replayed.
///
/// # Examples
///
/// ```
/// use rokudoku_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily puzzle 2024-01-15");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase by hashing it with SHA-256.
    ///
    /// The derivation is stable across runs and platforms, so a phrase like
    /// a date or a channel name names one specific puzzle forever.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the PCG-64 stream this seed names.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 64 {
            return Err(ParseSeedError::WrongLength { found: chars.len() });
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(chars.chunks_exact(2)) {
            let mut value = 0;
            for &c in pair {
                let digit = c
                    .to_digit(16)
                    .ok_or(ParseSeedError::InvalidHexDigit { c })?;
                #[expect(clippy::cast_possible_truncation)]
                {
                    value = value * 16 + digit as u8;
                }
            }
            *byte = value;
        }
        Ok(Self(bytes))
    }
}

/// Errors produced when parsing a seed from its hexadecimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
pub enum ParseSeedError {
    /// The text was not exactly 64 characters long.
    #[display("seed must be 64 hexadecimal digits, found {found} characters")]
    WrongLength {
        /// The number of characters found.
        found: usize,
    },
    /// A character that is not a hexadecimal digit.
    #[display("invalid hexadecimal digit {c:?} in seed")]
    InvalidHexDigit {
        /// The offending character.
        c: char,
    },
}
