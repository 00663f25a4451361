//! Tic-Tac-Toe: fixed-triple win lookup and a two-player turn state machine.

mod board;
mod game;

pub use board::{winner, Cells, Mark, CELLS, WINNING_LINES};
pub use game::{TttGame, TttOutcome};
