//! Lets `gambit-search` walk Othello positions.

use crate::{heuristic, Board, Move};
use gambit_search::{GameState, Score, Side};

impl GameState for Board {
    type Move = Move;

    /// Only the side to move is consulted: a position where it cannot move ends
    /// the search line even if the opponent still could.
    fn is_terminal(&self) -> bool {
        !self.has_moves()
    }

    fn children(&self) -> Vec<Self> {
        self.legal_moves().map(|loc| self.apply(loc)).collect()
    }

    fn last_move(&self) -> Option<Move> {
        self.last_location().map(Move::Place)
    }

    fn side_to_move(&self) -> Side {
        self.to_move().side()
    }

    fn heuristic(&self) -> Score {
        heuristic::evaluate(self)
    }
}
