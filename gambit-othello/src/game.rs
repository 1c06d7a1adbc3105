//! Players and moves, the vocabulary shared by the board and the console driver.

use crate::location::{Location, ParseLocationError};
use derive_more::{Display, Error, From};
use gambit_search::Side;
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (white).
    fn default() -> Self {
        Self::White
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Player {
    /// Black maximizes the heuristic, White minimizes it.
    pub fn side(self) -> Side {
        match self {
            Player::Black => Side::Max,
            Player::White => Side::Min,
        }
    }

    /// The character a disc of this colour is drawn with.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => '*',
            Player::White => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("black"),
            Player::White => f.write_str("white"),
        }
    }
}

/// An action in an Othello game: place a disc, or leave the program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Location),
    Exit,
}

impl From<Location> for Move {
    fn from(loc: Location) -> Self {
        Self::Place(loc)
    }
}

impl Move {
    /// The word that stands for [`Move::Exit`].
    pub const EXIT_KEYWORD: &'static str = "exit";

    /// The target square.
    ///
    /// Panics on [`Move::Exit`], which names no square; asking for one is a bug
    /// in the caller.
    pub fn location(self) -> Location {
        match self {
            Move::Place(loc) => loc,
            Move::Exit => panic!("Invalid accessor call: the exit action has no square."),
        }
    }

    /// Zero-based row of the target square. Panics on [`Move::Exit`].
    pub fn row(self) -> usize {
        self.location().to_coords().0
    }

    /// Zero-based column of the target square. Panics on [`Move::Exit`].
    pub fn column(self) -> usize {
        self.location().to_coords().1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(loc) => fmt::Display::fmt(loc, f),
            Move::Exit => f.write_str(Self::EXIT_KEYWORD),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error, From)]
pub enum ParseMoveError {
    #[display(fmt = "cannot read move: {}", _0)]
    Square(#[error(source)] ParseLocationError),
}

impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::EXIT_KEYWORD {
            return Ok(Move::Exit);
        }
        Ok(Move::Place(s.parse()?))
    }
}
