use crate::Board;
use rand::seq::IteratorRandom;
use rand::Rng;

/// Play up to `plies` uniformly random moves from the opening, passing when
/// forced. Stops early if the game ends.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, plies: usize) -> Board {
    let mut board = Board::new();
    for _ in 0..plies {
        if board.is_finished() {
            break;
        }
        match board.legal_moves().choose(rng) {
            Some(loc) => board = board.apply(loc),
            None => board.pass(),
        }
    }
    board
}
