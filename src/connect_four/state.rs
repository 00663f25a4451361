use rand::Rng;

use super::board::{self, Board, COLS};
use super::side::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Side),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Side,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create a fresh game with a coin-flip starting side
    pub fn new() -> Self {
        let first = if rand::rng().random_bool(0.5) {
            Side::Human
        } else {
            Side::Computer
        };
        Self::with_first(first)
    }

    /// Create a fresh game with a chosen starting side
    pub fn with_first(first: Side) -> Self {
        GameState {
            board: Board::new(),
            current: first,
            outcome: None,
        }
    }

    /// Get the side to move
    pub fn current_side(&self) -> Side {
        self.current
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for the evaluator's speculative lookahead.
    /// The evaluator restores the board before returning.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current side's piece in `column` and update the outcome.
    ///
    /// The turn alternates only while the game stays live: after a winning
    /// move `current_side` still names the winner, so the front end can
    /// caption the final board.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current)
            .map_err(|e| match e {
                board::MoveError::ColumnFull => MoveError::ColumnFull,
                board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        if self.board.check_win(row, column) {
            self.outcome = Some(GameOutcome::Winner(self.current));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current = self.current.other();
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
