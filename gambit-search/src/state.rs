//! The capability contract a game position must satisfy to be searched.

/// A static evaluation, always from [`Side::Max`]'s point of view.
pub type Score = i32;

/// Stands in for negative infinity. No heuristic may ever return it.
pub const NEG_INFINITY: Score = Score::MIN;

/// Stands in for positive infinity. No heuristic may ever return it.
pub const POS_INFINITY: Score = Score::MAX;

/// One of the two adversaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Max,
    Min,
}

impl std::ops::Not for Side {
    type Output = Self;

    /// Gets the other side.
    fn not(self) -> Self {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }
}

/// A single position in a game tree.
///
/// Implementations must uphold two rules the search relies on:
///
///  - [`children`](GameState::children) yields exactly the positions reachable
///    by one legal move of [`side_to_move`](GameState::side_to_move), in a fixed
///    order. The search breaks ties in favour of the earliest child, so this
///    order is observable.
///  - Every child reports the move that produced it through
///    [`last_move`](GameState::last_move).
pub trait GameState: Sized {
    type Move: Copy;

    /// Whether the game is over at this position.
    fn is_terminal(&self) -> bool;

    /// All positions reachable by one move of the side to move, in generation order.
    fn children(&self) -> Vec<Self>;

    /// The move that produced this position, or `None` for a root.
    fn last_move(&self) -> Option<Self::Move>;

    /// Which side acts next.
    fn side_to_move(&self) -> Side;

    /// Static evaluation; positive favours [`Side::Max`].
    fn heuristic(&self) -> Score;
}
