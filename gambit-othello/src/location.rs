//! Code for working with [`Location`]s on the Othello board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

/// A square on the board, stored as a row-major index (a1 = 0, h8 = 63).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location(u8);

impl Location {
    /// Convert from a row-major square index.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < NUM_SPACES);
        Self(index)
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.0
    }

    /// Convert from zero-based row (rank) and column (file) coordinates.
    pub fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < EDGE_LENGTH && col < EDGE_LENGTH);
        Self((row * EDGE_LENGTH + col) as u8)
    }

    /// Like [`from_coords`](Location::from_coords), but `None` off the board.
    pub fn try_from_coords(row: isize, col: isize) -> Option<Self> {
        let edge = EDGE_LENGTH as isize;
        if (0..edge).contains(&row) && (0..edge).contains(&col) {
            Some(Self::from_coords(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Get the row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        let index = self.0 as usize;
        (index / EDGE_LENGTH, index % EDGE_LENGTH)
    }

    /// The square one step away in direction `(d_row, d_col)`, if still on the board.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let (row, col) = self.to_coords();
        Self::try_from_coords(row as isize + d_row, col as isize + d_col)
    }

    /// Every square, in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(Location)
    }
}

/// Convert this [`Location`] into string notation ("d3").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        f.write_char((b'a' + col as u8) as char)?;
        f.write_char((b'1' + row as u8) as char)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseLocationError {
    #[display(fmt = "a square is written as two characters, like \"d3\"")]
    Length,
    #[display(fmt = "the file must be a letter from 'a' to 'h'")]
    File,
    #[display(fmt = "the rank must be a digit from '1' to '8'")]
    Rank,
}

/// Build a [`Location`] from its lowercase string notation ("d3").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseLocationError::Length);
        }

        let col = match bytes[0] {
            c @ b'a'..=b'h' => c - b'a',
            _ => return Err(ParseLocationError::File),
        };
        let row = match bytes[1] {
            r @ b'1'..=b'8' => r - b'1',
            _ => return Err(ParseLocationError::Rank),
        };

        Ok(Self::from_coords(row as usize, col as usize))
    }
}
