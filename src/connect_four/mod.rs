//! Core Connect Four logic: gravity-fill board, line-scan win detection, and
//! the game state machine with turn/outcome tracking.

mod board;
mod side;
mod state;

pub use board::{Board, COLS, ROWS};
pub use side::Side;
pub use state::{GameOutcome, GameState, MoveError};
