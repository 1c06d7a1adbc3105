//! `gambit-search` is a small adversarial search engine for two-player,
//! perfect-information, zero-sum games.
//!
//! Games plug in by implementing [`GameState`]. The engine never looks at the
//! rules; it only walks the successor states a position hands back:
//!
//!  - [`minimax`] computes the exact value of a position to a fixed depth.
//!  - [`alphabeta`] computes the same root decision while skipping subtrees
//!    that cannot change it.
//!  - [`Searcher`] wraps both behind an [`Algorithm`] switch and counts the
//!    work done in [`SearchStats`].

pub mod search;

mod state;

pub use search::{
    alphabeta, best_move_alphabeta, best_move_minimax, minimax, Algorithm, Decision,
    ParseAlgorithmError, SearchStats, Searcher,
};
pub use state::*;
