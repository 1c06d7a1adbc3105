//! The positional evaluation used at the search horizon.

use crate::{Board, Location, Player};
use gambit_search::Score;

/// Square weights, indexed `[row][col]` with row 0 being rank "1".
/// Corners weigh most, then edges; squares touching a corner weigh nothing.
pub const WEIGHTS: [[Score; 8]; 8] = [
    [8, 0, 5, 4, 4, 5, 0, 8],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 0, 1, 1, 1, 1, 0, 5],
    [4, 0, 1, 1, 1, 1, 0, 4],
    [4, 0, 1, 1, 1, 1, 0, 4],
    [5, 0, 1, 1, 1, 1, 0, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [8, 0, 5, 4, 4, 5, 0, 8],
];

#[inline]
pub fn weight(loc: Location) -> Score {
    let (row, col) = loc.to_coords();
    WEIGHTS[row][col]
}

/// Weighted discs of `player`.
pub fn material(board: &Board, player: Player) -> Score {
    board.bitboard(player).into_iter().map(weight).sum()
}

/// Black's weighted discs minus White's. Positive favours Black, the maximizing side.
pub fn evaluate(board: &Board) -> Score {
    material(board, Player::Black) - material(board, Player::White)
}
