//! Sets of squares packed into a single word.
//!
//! Bit `i` is the square at row `i / 8`, column `i % 8`, where row 0 is rank "1"
//! and column 0 is file "a". Iterating a [`Bitboard`] therefore visits squares in
//! row-major order: a1, b1, ..., h1, a2, ..., h8.

use crate::{utils, Location};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per square of an Othello board.
/// Wraps [`u64`] for bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting discs for Black: d4 and e5.
pub const BLACK_START: Bitboard = Bitboard(0x0000_0010_0800_0000);

/// Starting discs for White: e4 and d5.
pub const WHITE_START: Bitboard = Bitboard(0x0000_0008_1000_0000);

impl Bitboard {
    pub const EMPTY: Self = Self(0);

    /// Count the number of squares in the set.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of squares not in the set.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        !(self & Self::from(loc)).is_empty()
    }
}

impl From<Location> for Bitboard {
    #[inline]
    fn from(loc: Location) -> Self {
        Self(1 << loc.to_index())
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(|loc| if self.contains(loc) { '#' } else { '.' }, f)
    }
}

/// Iterator over the squares in a [`Bitboard`], lowest index first.
#[derive(Clone, Copy, Debug)]
pub struct Squares(u64);

impl Iterator for Squares {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0 == 0 {
            return None;
        }

        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Location::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Squares {}

/// Iterate over the squares in row-major order.
impl IntoIterator for Bitboard {
    type Item = Location;
    type IntoIter = Squares;

    fn into_iter(self) -> Self::IntoIter {
        Squares(self.0)
    }
}
