//! `gambit-othello` plays Othello on top of the `gambit-search` engine.
//!
//! The crate is organized in three layers:
//!
//!  - [`bitboard`] packs a set of squares into one word; [`Location`] names a square.
//!  - [`Board`] implements the rules: legal moves, disc flipping, passing, and the
//!    end of the game. It also implements [`gambit_search::GameState`], scored by
//!    the positional [`heuristic`], so it can be searched directly.
//!  - [`play`] is a console game loop pitting a human (White) against the search (Black).

pub mod bitboard;
pub mod heuristic;
pub mod play;
pub mod test_utils;

mod board;
mod game;
mod location;
mod state;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
