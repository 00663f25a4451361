use crate::connect_four::{Board, Side};

/// Universal interface for computer opponents.
pub trait Agent {
    /// Select a column for `side` to play. The board is borrowed mutably so
    /// the agent can test speculative placements; it must be restored to its
    /// pre-call state before this returns.
    ///
    /// Callers must ensure at least one column has an open cell.
    fn select_column(&mut self, board: &mut Board, side: Side) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
