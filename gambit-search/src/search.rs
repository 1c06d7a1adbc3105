//! Fixed-depth game-tree search.

use crate::state::{GameState, Score, Side, NEG_INFINITY, POS_INFINITY};
use derive_more::{Display, Error};
use std::fmt;

/// Which search procedure a [`Searcher`] runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Exhaustive minimax.
    Minimax,
    /// Minimax with alpha-beta pruning.
    AlphaBeta,
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::AlphaBeta
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => f.write_str("minimax"),
            Algorithm::AlphaBeta => f.write_str("alphabeta"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "unknown algorithm (expected \"minimax\" or \"alphabeta\")")]
pub struct ParseAlgorithmError;

impl std::str::FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Self::Minimax),
            "alphabeta" | "alpha-beta" => Ok(Self::AlphaBeta),
            _ => Err(ParseAlgorithmError),
        }
    }
}

/// The outcome of a root search: which move to play and what it is worth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision<M> {
    pub best_move: M,
    pub value: Score,
}

/// Work counters for a single search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions whose children were generated, root included.
    pub nodes: u64,
    /// Calls to the static evaluation at leaves.
    pub evaluations: u64,
    /// Times a node stopped iterating its children early.
    pub cutoffs: u64,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} evaluations, {} cutoffs",
            self.nodes, self.evaluations, self.cutoffs
        )
    }
}

/// Runs searches with one [`Algorithm`] and remembers the statistics of the last one.
#[derive(Clone, Debug, Default)]
pub struct Searcher {
    algorithm: Algorithm,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            stats: SearchStats::default(),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Statistics gathered by the most recent call to [`decide`](Searcher::decide).
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Pick the move whose subtree has the greatest value, looking `depth` plies ahead.
    ///
    /// The root is always expanded, so a depth of 0 searches like a depth of 1.
    /// Ties go to the earliest child in generation order. Returns `None` when the
    /// root has no children.
    pub fn decide<S: GameState>(&mut self, root: &S, depth: u32) -> Option<Decision<S::Move>> {
        self.stats = SearchStats::default();
        self.stats.nodes += 1;

        let remaining = depth.saturating_sub(1);
        let mut best: Option<Decision<S::Move>> = None;

        // The root never prunes, but later siblings inherit the best value so far.
        let mut alpha = NEG_INFINITY;

        for child in root.children() {
            let value = match self.algorithm {
                Algorithm::Minimax => self.minimax_value(&child, remaining),
                Algorithm::AlphaBeta => self.alphabeta_value(&child, remaining, alpha, POS_INFINITY),
            };

            if best.as_ref().map_or(true, |b| value > b.value) {
                let best_move = child
                    .last_move()
                    .expect("child positions must record the move that produced them");
                best = Some(Decision { best_move, value });
            }
            alpha = alpha.max(value);
        }

        best
    }

    fn evaluate<S: GameState>(&mut self, state: &S) -> Score {
        self.stats.evaluations += 1;
        state.heuristic()
    }

    fn minimax_value<S: GameState>(&mut self, state: &S, depth: u32) -> Score {
        if depth == 0 || state.is_terminal() {
            return self.evaluate(state);
        }

        let children = state.children();
        if children.is_empty() {
            return self.evaluate(state);
        }
        self.stats.nodes += 1;

        match state.side_to_move() {
            Side::Max => children
                .iter()
                .map(|child| self.minimax_value(child, depth - 1))
                .fold(NEG_INFINITY, Score::max),
            Side::Min => children
                .iter()
                .map(|child| self.minimax_value(child, depth - 1))
                .fold(POS_INFINITY, Score::min),
        }
    }

    fn alphabeta_value<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        if depth == 0 || state.is_terminal() {
            return self.evaluate(state);
        }

        let children = state.children();
        if children.is_empty() {
            return self.evaluate(state);
        }
        self.stats.nodes += 1;

        match state.side_to_move() {
            Side::Max => {
                let mut value = NEG_INFINITY;
                for child in &children {
                    value = value.max(self.alphabeta_value(child, depth - 1, alpha, beta));
                    alpha = alpha.max(value);

                    // Fail high: MIN already has a line elsewhere that keeps us below this.
                    if beta <= alpha {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
                value
            }
            Side::Min => {
                let mut value = POS_INFINITY;
                for child in &children {
                    value = value.min(self.alphabeta_value(child, depth - 1, alpha, beta));
                    beta = beta.min(value);

                    // Fail low: MAX already has a line elsewhere that beats this.
                    if beta <= alpha {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
                value
            }
        }
    }
}

/// Minimax value of `state` searched `depth` plies deep.
pub fn minimax<S: GameState>(state: &S, depth: u32) -> Score {
    Searcher::new(Algorithm::Minimax).minimax_value(state, depth)
}

/// Alpha-beta value of `state` within the window `(alpha, beta)`.
///
/// Exact when the true value lies strictly inside the window; otherwise a bound
/// on the side of the window it fell out of.
pub fn alphabeta<S: GameState>(state: &S, depth: u32, alpha: Score, beta: Score) -> Score {
    Searcher::new(Algorithm::AlphaBeta).alphabeta_value(state, depth, alpha, beta)
}

/// The move plain minimax picks at `root`, or `None` if there is no legal move.
pub fn best_move_minimax<S: GameState>(root: &S, depth: u32) -> Option<S::Move> {
    Searcher::new(Algorithm::Minimax)
        .decide(root, depth)
        .map(|decision| decision.best_move)
}

/// The move alpha-beta picks at `root`, or `None` if there is no legal move.
/// Always the same move as [`best_move_minimax`].
pub fn best_move_alphabeta<S: GameState>(root: &S, depth: u32) -> Option<S::Move> {
    Searcher::new(Algorithm::AlphaBeta)
        .decide(root, depth)
        .map(|decision| decision.best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    /// A hand-built game tree. Leaves are terminal; interior nodes carry the
    /// heuristic reported when the depth limit cuts them off.
    #[derive(Clone, Debug)]
    struct Node {
        mv: Option<usize>,
        side: Side,
        value: Score,
        children: Vec<Node>,
    }

    fn leaf(value: Score) -> Node {
        Node {
            mv: None,
            side: Side::Max,
            value,
            children: Vec::new(),
        }
    }

    fn branch(side: Side, value: Score, children: Vec<Node>) -> Node {
        let children = children
            .into_iter()
            .enumerate()
            .map(|(i, child)| Node {
                mv: Some(i),
                side: !side,
                ..child
            })
            .collect();
        Node {
            mv: None,
            side,
            value,
            children,
        }
    }

    impl GameState for Node {
        type Move = usize;

        fn is_terminal(&self) -> bool {
            self.children.is_empty()
        }

        fn children(&self) -> Vec<Self> {
            self.children.clone()
        }

        fn last_move(&self) -> Option<usize> {
            self.mv
        }

        fn side_to_move(&self) -> Side {
            self.side
        }

        fn heuristic(&self) -> Score {
            self.value
        }
    }

    /// MAX to move over three MIN replies, the usual textbook shape.
    fn textbook() -> Node {
        branch(
            Side::Max,
            0,
            vec![
                branch(Side::Min, 0, vec![leaf(3), leaf(12), leaf(8)]),
                branch(Side::Min, 0, vec![leaf(2), leaf(4), leaf(6)]),
                branch(Side::Min, 0, vec![leaf(14), leaf(5), leaf(2)]),
            ],
        )
    }

    #[test]
    fn minimax_textbook_tree() {
        let tree = textbook();
        assert_eq!(minimax(&tree, 2), 3);
        assert_eq!(best_move_minimax(&tree, 2), Some(0));
    }

    #[test]
    fn alphabeta_matches_minimax_and_prunes() {
        let tree = textbook();

        let mut exhaustive = Searcher::new(Algorithm::Minimax);
        let mut pruned = Searcher::new(Algorithm::AlphaBeta);
        let expected = exhaustive.decide(&tree, 2);
        let actual = pruned.decide(&tree, 2);

        assert_eq!(expected, Some(Decision { best_move: 0, value: 3 }));
        assert_eq!(actual, expected);

        assert_eq!(exhaustive.stats().evaluations, 9);
        assert_eq!(pruned.stats().evaluations, 7);
        assert_eq!(pruned.stats().cutoffs, 2);
    }

    #[test]
    fn alphabeta_full_window_is_exact() {
        let tree = textbook();
        assert_eq!(alphabeta(&tree, 2, NEG_INFINITY, POS_INFINITY), 3);
    }

    #[test]
    fn ties_go_to_first_child() {
        let tree = branch(Side::Max, 0, vec![leaf(5), leaf(7), leaf(7), leaf(-1)]);
        assert_eq!(best_move_minimax(&tree, 1), Some(1));
        assert_eq!(best_move_alphabeta(&tree, 1), Some(1));
    }

    #[test]
    fn no_children_means_no_move() {
        let tree = leaf(10);
        assert_eq!(best_move_minimax(&tree, 3), None);
        assert_eq!(best_move_alphabeta(&tree, 3), None);
    }

    #[test]
    fn terminal_returns_heuristic_at_any_depth() {
        let tree = leaf(-42);
        for depth in 0..6 {
            assert_eq!(minimax(&tree, depth), -42);
            assert_eq!(alphabeta(&tree, depth, NEG_INFINITY, POS_INFINITY), -42);
        }
    }

    #[test]
    fn depth_limit_uses_interior_heuristic() {
        let tree = branch(
            Side::Max,
            0,
            vec![
                branch(Side::Min, 9, vec![leaf(-100)]),
                branch(Side::Min, 4, vec![leaf(100)]),
            ],
        );

        // One ply: the interior guesses decide.
        assert_eq!(best_move_minimax(&tree, 1), Some(0));
        // Two plies: the real leaves decide.
        assert_eq!(best_move_minimax(&tree, 2), Some(1));
        assert_eq!(best_move_alphabeta(&tree, 2), Some(1));
    }

    #[test]
    fn zero_depth_searches_one_ply() {
        let tree = textbook();
        assert_eq!(
            Searcher::new(Algorithm::Minimax).decide(&tree, 0),
            Searcher::new(Algorithm::Minimax).decide(&tree, 1)
        );
    }

    #[test]
    fn min_nodes_minimize() {
        let tree = branch(Side::Min, 0, vec![leaf(4), leaf(-3), leaf(8)]);
        assert_eq!(minimax(&tree, 1), -3);
        assert_eq!(alphabeta(&tree, 1, NEG_INFINITY, POS_INFINITY), -3);
    }

    #[test]
    fn stats_reset_between_searches() {
        let tree = textbook();
        let mut searcher = Searcher::new(Algorithm::Minimax);
        searcher.decide(&tree, 2);
        let first = searcher.stats();
        searcher.decide(&tree, 2);
        assert_eq!(searcher.stats(), first);
        assert_eq!(first.nodes, 4);
    }

    #[test]
    fn algorithm_from_str() {
        assert_eq!(Algorithm::from_str("minimax"), Ok(Algorithm::Minimax));
        assert_eq!(Algorithm::from_str("AlphaBeta"), Ok(Algorithm::AlphaBeta));
        assert_eq!(Algorithm::from_str("alpha-beta"), Ok(Algorithm::AlphaBeta));
        assert_eq!(Algorithm::from_str("negamax"), Err(ParseAlgorithmError));
        assert_eq!(Algorithm::AlphaBeta.to_string(), "alphabeta");
    }
}
