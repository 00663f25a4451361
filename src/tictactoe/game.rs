use super::board::{winner, Cells, Mark, CELLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TttOutcome {
    Winner(Mark),
    Tie,
}

/// Tic-Tac-Toe turn state machine with a win tally that survives resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TttGame {
    cells: Cells,
    turn: Mark,
    outcome: Option<TttOutcome>,
    wins_x: u32,
    wins_o: u32,
}

impl TttGame {
    /// Create a fresh game, X to move
    pub fn new() -> Self {
        TttGame {
            cells: [None; CELLS],
            turn: Mark::X,
            outcome: None,
            wins_x: 0,
            wins_o: 0,
        }
    }

    /// Get the mark at a square
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }

    /// Get the mark to move
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<TttOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Wins per mark so far: (X, O)
    pub fn scores(&self) -> (u32, u32) {
        (self.wins_x, self.wins_o)
    }

    /// Place the current mark at `index`. A click on a taken square, an
    /// out-of-range index, or a finished game is a no-op; returns whether a
    /// mark was placed.
    pub fn play(&mut self, index: usize) -> bool {
        if index >= CELLS || self.is_over() || self.cells[index].is_some() {
            return false;
        }

        self.cells[index] = Some(self.turn);

        if let Some(mark) = winner(&self.cells) {
            match mark {
                Mark::X => self.wins_x += 1,
                Mark::O => self.wins_o += 1,
            }
            self.outcome = Some(TttOutcome::Winner(mark));
        } else if self.cells.iter().all(Option::is_some) {
            self.outcome = Some(TttOutcome::Tie);
        } else {
            self.turn = self.turn.other();
        }

        true
    }

    /// Clear the board for a rematch, X to move; the win tally stays
    pub fn reset(&mut self) {
        self.cells = [None; CELLS];
        self.turn = Mark::X;
        self.outcome = None;
    }

    /// Reset and choose which mark opens
    pub fn set_first(&mut self, mark: Mark) {
        self.reset();
        self.turn = mark;
    }
}

impl Default for TttGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_game() {
        let game = TttGame::new();
        assert_eq!(game.turn(), Mark::X);
        assert!(!game.is_over());
        assert_eq!(game.scores(), (0, 0));
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = TttGame::new();
        assert!(game.play(4));
        assert_eq!(game.turn(), Mark::O);
        assert!(game.play(0));
        assert_eq!(game.turn(), Mark::X);
    }

    #[test]
    fn test_taken_square_is_a_no_op() {
        let mut game = TttGame::new();
        assert!(game.play(4));
        assert!(!game.play(4));
        assert_eq!(game.turn(), Mark::O);
        assert_eq!(game.cell(4), Some(Mark::X));
    }

    #[test]
    fn test_top_row_win_and_lockout() {
        // X X _ / O O _ / _ _ _, X to move at index 2
        let mut game = TttGame::new();
        game.play(0); // X
        game.play(3); // O
        game.play(1); // X
        game.play(4); // O
        assert!(game.play(2)); // X completes row 0

        assert_eq!(game.outcome(), Some(TttOutcome::Winner(Mark::X)));
        assert_eq!(game.scores(), (1, 0));

        // Further clicks are no-ops until reset
        assert!(!game.play(5));
        assert_eq!(game.cell(5), None);

        game.reset();
        assert!(!game.is_over());
        assert_eq!(game.scores(), (1, 0)); // tally survives
        assert!(game.play(5));
    }

    #[test]
    fn test_tie_game() {
        // X O X / X O O / O X X: full, no line
        let mut game = TttGame::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            assert!(game.play(index));
        }
        assert_eq!(game.outcome(), Some(TttOutcome::Tie));
        assert_eq!(game.scores(), (0, 0));
    }

    #[test]
    fn test_set_first() {
        let mut game = TttGame::new();
        game.play(0);
        game.set_first(Mark::O);
        assert_eq!(game.turn(), Mark::O);
        assert_eq!(game.cell(0), None);
    }
}
