//! "Perft": count the positions reachable in exactly `depth` plies.
//! A pass counts as a ply; a finished game is a leaf wherever it ends.
//! Reference counts: http://www.aartbik.com/MISC/reversi.html

use crate::Board;

pub fn run_perft(depth: u32) -> u64 {
    leaves_below(Board::new(), depth)
}

pub fn leaves_below(board: Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        if board.is_finished() {
            return 1;
        }

        let mut passed = board;
        passed.pass();
        return leaves_below(passed, depth - 1);
    }

    moves.map(|loc| leaves_below(board.apply(loc), depth - 1)).sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}
