//! Algebraic board coordinates.
//!
//! DESIGN
//! ======
//! A `Square` is always named in the canonical white-bottom scheme. Grid
//! `(row, col)` comes from the server's row-major snapshot where row 0 is
//! rank 8, so naming never depends on which side is viewing the board.

#[cfg(test)]
#[path = "square_test.rs"]
mod square_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of files and ranks on the board.
pub const BOARD_SIZE: usize = 8;

/// Error returned when parsing algebraic square text such as `"e4"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square: {0:?}")]
pub struct SquareParseError(pub String);

/// A board square identified by file (`a`..`h`) and rank (`1`..`8`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    /// Zero-based file index, 0 = `a`.
    file: u8,
    /// Zero-based rank index, 0 = rank 1.
    rank: u8,
}

impl Square {
    /// Build a square from zero-based file and rank indices.
    ///
    /// Returns `None` if either index is outside `0..8`.
    #[must_use]
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if usize::from(file) < BOARD_SIZE && usize::from(rank) < BOARD_SIZE {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Name the cell at `(row, col)` of the row-major snapshot.
    ///
    /// `file = col`, `rank = 8 - row`. Returns `None` outside the 8×8 grid.
    #[must_use]
    pub fn from_grid(row: usize, col: usize) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        // Both indices are below 8 here.
        #[allow(clippy::cast_possible_truncation)]
        let (file, rank) = (col as u8, (BOARD_SIZE - 1 - row) as u8);
        Self::new(file, rank)
    }

    /// Zero-based file index (0 = `a`).
    #[must_use]
    pub fn file(self) -> u8 {
        self.file
    }

    /// Zero-based rank index (0 = rank 1).
    #[must_use]
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Position of this square in the row-major snapshot.
    #[must_use]
    pub fn grid_position(self) -> (usize, usize) {
        (BOARD_SIZE - 1 - usize::from(self.rank), usize::from(self.file))
    }

    /// File letter, `'a'..='h'`.
    #[must_use]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.file)
    }

    /// Rank digit, `'1'..='8'`.
    #[must_use]
    pub fn rank_char(self) -> char {
        char::from(b'1' + self.rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let [file, rank] = bytes else {
            return Err(SquareParseError(s.to_owned()));
        };
        let file = file.to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(rank) {
            return Err(SquareParseError(s.to_owned()));
        }
        Self::new(file - b'a', rank - b'1').ok_or_else(|| SquareParseError(s.to_owned()))
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
