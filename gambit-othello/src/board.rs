//! Othello rules over a pair of bitboards.
//!
//! A [`Board`] is a small `Copy` value. Searching never mutates a position:
//! [`Board::apply`] returns the successor and leaves the original untouched.
//! The in-place [`Board::play`] and [`Board::pass`] exist for advancing a real game.

use crate::bitboard::{Bitboard, BLACK_START, WHITE_START};
use crate::{utils, Location, Player, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use itertools::Itertools;
use std::fmt;

/// Compass directions as (row, column) steps: N, NE, E, SE, S, SW, W, NW.
const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// A complete position: both players' discs, whose turn it is, and how we got here.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
    to_move: Player,
    last_move: Option<Location>,
}

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display(fmt = "{} is already taken", at)]
    Occupied { at: Location },
    #[display(fmt = "{} does not capture any discs", at)]
    NoCapture { at: Location },
}

/// The legal moves out of a position. Iterates in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From, Into)]
pub struct MoveList(Bitboard);

impl MoveList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, loc: Location) -> bool {
        self.0.contains(loc)
    }
}

impl Iterator for MoveList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let next = self.0.into_iter().next()?;
        self.0 ^= Bitboard::from(next);
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for MoveList {}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.into_iter().join(", "))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            black: BLACK_START,
            white: WHITE_START,
            to_move: Player::default(),
            last_move: None,
        }
    }

    /// Build a position from raw disc sets. The sets must not overlap.
    pub fn from_bitboards(black: Bitboard, white: Bitboard, to_move: Player) -> Self {
        assert!((black & white).is_empty(), "a square cannot hold two discs");
        Self {
            black,
            white,
            to_move,
            last_move: None,
        }
    }

    /// The same discs with `player` to move.
    pub fn with_to_move(self, player: Player) -> Self {
        Self {
            to_move: player,
            ..self
        }
    }

    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The square the previous move was played on, if any.
    #[inline]
    pub fn last_location(&self) -> Option<Location> {
        self.last_move
    }

    #[inline]
    pub fn bitboard(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    /// Who owns the disc on `loc`, if anyone.
    pub fn get(&self, loc: Location) -> Option<Player> {
        if self.black.contains(loc) {
            Some(Player::Black)
        } else if self.white.contains(loc) {
            Some(Player::White)
        } else {
            None
        }
    }

    pub fn count(&self, player: Player) -> u8 {
        self.bitboard(player).count_occupied()
    }

    pub fn count_empty(&self) -> u8 {
        self.occupied().count_empty()
    }

    /// The opponent discs a disc on `loc` would capture for the side to move.
    /// Empty if `loc` is taken or captures nothing.
    pub fn flips(&self, loc: Location) -> Bitboard {
        if self.occupied().contains(loc) {
            return Bitboard::EMPTY;
        }

        let own = self.bitboard(self.to_move);
        let opponent = self.bitboard(!self.to_move);

        DIRECTIONS
            .iter()
            .fold(Bitboard::EMPTY, |flips, &(d_row, d_col)| {
                flips | ray_flips(own, opponent, loc, d_row, d_col)
            })
    }

    #[inline]
    pub fn is_legal(&self, loc: Location) -> bool {
        !self.flips(loc).is_empty()
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        let empties = !self.occupied();
        let moves = empties
            .into_iter()
            .filter(|&loc| self.is_legal(loc))
            .fold(Bitboard::EMPTY, |moves, loc| moves | Bitboard::from(loc));
        MoveList(moves)
    }

    /// Whether the side to move has any legal move.
    pub fn has_moves(&self) -> bool {
        (!self.occupied()).into_iter().any(|loc| self.is_legal(loc))
    }

    /// The position after the side to move plays on `loc`.
    /// `loc` must be legal; check with [`is_legal`](Board::is_legal) first.
    pub fn apply(&self, loc: Location) -> Self {
        let flips = self.flips(loc);
        debug_assert!(!flips.is_empty(), "{} is not a legal move", loc);

        let placed = flips | Bitboard::from(loc);
        let (mut black, mut white) = (self.black, self.white);
        match self.to_move {
            Player::Black => {
                black |= placed;
                white ^= flips;
            }
            Player::White => {
                white |= placed;
                black ^= flips;
            }
        }

        Self {
            black,
            white,
            to_move: !self.to_move,
            last_move: Some(loc),
        }
    }

    /// Play `loc` for the side to move, in place. Refused moves leave the board unchanged.
    pub fn play(&mut self, loc: Location) -> Result<(), MoveError> {
        if self.occupied().contains(loc) {
            return Err(MoveError::Occupied { at: loc });
        }
        if !self.is_legal(loc) {
            return Err(MoveError::NoCapture { at: loc });
        }

        *self = self.apply(loc);
        Ok(())
    }

    /// Hand the turn to the opponent without placing a disc.
    pub fn pass(&mut self) {
        self.to_move = !self.to_move;
    }

    /// Whether the game is over: neither player can move.
    pub fn is_finished(&self) -> bool {
        !self.has_moves() && !self.with_to_move(!self.to_move).has_moves()
    }

    /// The player with more discs, or `None` on a tie.
    pub fn winner(&self) -> Option<Player> {
        let black = self.count(Player::Black);
        let white = self.count(Player::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Opponent discs bracketed between `from` and an own disc along one direction.
fn ray_flips(
    own: Bitboard,
    opponent: Bitboard,
    from: Location,
    d_row: isize,
    d_col: isize,
) -> Bitboard {
    let mut run = Bitboard::EMPTY;
    let mut cursor = from.offset(d_row, d_col);

    while let Some(loc) = cursor {
        if opponent.contains(loc) {
            run |= Bitboard::from(loc);
            cursor = loc.offset(d_row, d_col);
        } else if own.contains(loc) {
            return run;
        } else {
            break;
        }
    }

    // Ran into an empty square or off the board.
    Bitboard::EMPTY
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(|loc| self.get(loc).map_or('.', Player::symbol), f)?;
        write!(f, "\n{} ({}) to move", self.to_move, self.to_move.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected {} squares, found {}", NUM_SPACES, found)]
    Length { found: usize },
    #[display(fmt = "unknown square symbol {:?}", symbol)]
    Symbol { symbol: char },
}

/// Read 64 square symbols in display order: rank 8 first, files "a" to "h"
/// within each rank. `*` or `X` is Black, `O` is White, `.` or `-` is empty, and
/// whitespace is ignored. The result has White to move.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != NUM_SPACES {
            return Err(ParseBoardError::Length {
                found: symbols.len(),
            });
        }

        let mut black = Bitboard::EMPTY;
        let mut white = Bitboard::EMPTY;
        for (i, &symbol) in symbols.iter().enumerate() {
            let loc = Location::from_coords(EDGE_LENGTH - 1 - i / EDGE_LENGTH, i % EDGE_LENGTH);
            match symbol {
                '*' | 'X' | 'x' => black |= Bitboard::from(loc),
                'O' | 'o' => white |= Bitboard::from(loc),
                '.' | '-' => {}
                _ => return Err(ParseBoardError::Symbol { symbol }),
            }
        }

        Ok(Self::from_bitboards(black, white, Player::default()))
    }
}
