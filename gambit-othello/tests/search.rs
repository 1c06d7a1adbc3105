use gambit_othello::test_utils::{random_position, run_perft};
use gambit_othello::{Board, Location, Move};
use gambit_search::{
    alphabeta, best_move_alphabeta, best_move_minimax, minimax, Algorithm, GameState, Searcher,
    NEG_INFINITY, POS_INFINITY,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::str::FromStr;

fn both(board: &Board, depth: u32) -> (Searcher, Searcher) {
    let mut minimax = Searcher::new(Algorithm::Minimax);
    let mut alphabeta = Searcher::new(Algorithm::AlphaBeta);
    assert_eq!(minimax.decide(board, depth), alphabeta.decide(board, depth));
    (minimax, alphabeta)
}

#[test]
fn opening_decisions_agree() {
    let board = Board::new();
    for depth in 1..=6 {
        let (minimax, alphabeta) = both(&board, depth);
        assert!(alphabeta.stats().evaluations <= minimax.stats().evaluations);
    }
}

#[test]
fn minimax_visits_every_leaf() {
    // No passes happen this early, so the horizon is exactly the perft frontier.
    for depth in 1..=6 {
        let mut searcher = Searcher::new(Algorithm::Minimax);
        searcher.decide(&Board::new(), depth);
        assert_eq!(searcher.stats().evaluations, run_perft(depth));
        assert_eq!(searcher.stats().cutoffs, 0);
    }
}

#[test]
fn alphabeta_prunes() {
    let (minimax, alphabeta) = both(&Board::new(), 5);
    assert!(alphabeta.stats().evaluations < minimax.stats().evaluations);
    assert!(alphabeta.stats().cutoffs > 0);
}

#[test]
fn opening_move_at_depth_four() {
    let board = Board::new();
    let opening: Vec<Move> = ["d3", "c4", "f5", "e6"]
        .iter()
        .map(|s| Move::from_str(s).unwrap())
        .collect();

    let decision = Searcher::default().decide(&board, 4).unwrap();
    assert!(opening.contains(&decision.best_move));

    let best_child = board
        .children()
        .iter()
        .map(|child| minimax(child, 3))
        .max()
        .unwrap();
    assert_eq!(decision.value, best_child);

    assert_eq!(best_move_minimax(&board, 4), Some(decision.best_move));
    assert_eq!(best_move_alphabeta(&board, 4), Some(decision.best_move));
}

#[test]
fn full_window_alphabeta_is_minimax() {
    let mut rng = StdRng::seed_from_u64(2021);
    for plies in (0..40).step_by(5) {
        let board = random_position(&mut rng, plies);
        for depth in 0..=3 {
            assert_eq!(
                alphabeta(&board, depth, NEG_INFINITY, POS_INFINITY),
                minimax(&board, depth),
                "{}\ndepth {}",
                board,
                depth
            );
        }
    }
}

#[test]
fn deep_decisions_agree() {
    let mut rng = StdRng::seed_from_u64(8);
    for &(plies, depth) in &[(10, 5), (20, 5), (30, 5), (4, 6)] {
        let board = random_position(&mut rng, plies);
        both(&board, depth);
    }
}

#[test]
fn terminal_position_scores_heuristic() {
    let board = Board::from_str(&"*".repeat(64)).unwrap();
    assert!(board.is_terminal());
    assert_eq!(minimax(&board, 4), 120);
    assert_eq!(alphabeta(&board, 4, NEG_INFINITY, POS_INFINITY), 120);
    assert_eq!(Searcher::default().decide(&board, 4), None);
}

#[test]
fn decision_names_a_legal_square() {
    let mut rng = StdRng::seed_from_u64(5);
    let board = random_position(&mut rng, 24);
    if let Some(decision) = Searcher::default().decide(&board, 3) {
        let loc: Location = decision.best_move.location();
        assert!(board.is_legal(loc));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn alphabeta_matches_minimax(seed in any::<u64>(), plies in 0usize..50, depth in 1u32..=6) {
        let board = random_position(&mut StdRng::seed_from_u64(seed), plies);

        let mut minimax = Searcher::new(Algorithm::Minimax);
        let mut alphabeta = Searcher::new(Algorithm::AlphaBeta);
        prop_assert_eq!(minimax.decide(&board, depth), alphabeta.decide(&board, depth));
        prop_assert!(alphabeta.stats().evaluations <= minimax.stats().evaluations);
    }
}
