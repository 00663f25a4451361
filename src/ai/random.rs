use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::connect_four::{Board, Side, COLS};

use super::agent::Agent;

/// An agent that selects uniformly at random from the open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, board: &mut Board, _side: Side) -> usize {
        let open: Vec<usize> = (0..COLS).filter(|&col| !board.is_column_full(col)).collect();
        assert!(!open.is_empty(), "No open columns available");
        open[self.rng.random_range(0..open.len())]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect_four::GameState;

    #[test]
    fn test_random_agent_selects_open_column() {
        let mut agent = RandomAgent::new();
        let mut board = Board::new();
        for _ in 0..crate::connect_four::ROWS {
            board.drop_piece(0, Side::Human).unwrap();
        }

        for _ in 0..100 {
            let col = agent.select_column(&mut board, Side::Computer);
            assert!(!board.is_column_full(col), "Column {} is full", col);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent = RandomAgent::new();
        let mut state = GameState::with_first(Side::Human);

        while !state.is_terminal() {
            let side = state.current_side();
            let col = agent.select_column(state.board_mut(), side);
            state.apply_move_mut(col).unwrap();
        }

        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
