use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::connect_four::{Board, Side, COLS};

use super::agent::Agent;

/// The default computer opponent. Classifies every open column into one of
/// four priority tiers by speculative placement, then picks uniformly at
/// random within the best non-empty tier:
///
/// - tier 0: completes four-in-a-row for the agent ("win now")
/// - tier 1: the opponent would win here next turn ("block")
/// - tier 2: neither of the above ("neutral")
/// - tier 3: playing here lets the opponent win on the cell directly above
///   ("gives away a win", avoided unless nothing else is left)
///
/// The tier-3 probe is deliberately one cell deep. It looks only at the cell
/// directly above the tested one, never further up the column and never at
/// other columns, so this is a one-ply heuristic rather than a minimax
/// search.
pub struct TieredAgent {
    rng: StdRng,
}

impl TieredAgent {
    pub fn new() -> Self {
        TieredAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded constructor for reproducible play
    pub fn from_seed(seed: u64) -> Self {
        TieredAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Classify the column whose open cell is (row, col). Every speculative
    /// placement is scoped, so the owners are untouched on return; the
    /// caller clears the winning flags the speculative win checks may have
    /// set.
    fn classify(board: &mut Board, row: usize, col: usize, side: Side) -> usize {
        let opponent = side.other();

        if board.with_piece(row, col, side, |b| b.check_win(row, col)) {
            return 0;
        }

        if board.with_piece(row, col, opponent, |b| b.check_win(row, col)) {
            return 1;
        }

        if row > 0 {
            let hands_over_win = board.with_piece(row, col, side, |b| {
                b.with_piece(row - 1, col, opponent, |b| b.check_win(row - 1, col))
            });
            if hands_over_win {
                return 3;
            }
        }

        2
    }
}

impl Default for TieredAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for TieredAgent {
    fn select_column(&mut self, board: &mut Board, side: Side) -> usize {
        let mut tiers: [Vec<usize>; 4] = Default::default();

        for col in 0..COLS {
            let Some(row) = board.open_row(col) else {
                continue;
            };
            tiers[Self::classify(board, row, col, side)].push(col);
        }

        // The win checks above may have flagged hypothetical runs
        board.clear_winning();

        let bucket = tiers
            .iter()
            .find(|tier| !tier.is_empty())
            .expect("no open column: caller must check the board is not full");
        bucket[self.rng.random_range(0..bucket.len())]
    }

    fn name(&self) -> &str {
        "Tiered"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> TieredAgent {
        TieredAgent::from_seed(7)
    }

    #[test]
    fn test_never_picks_full_column() {
        let mut board = Board::new();
        // Fill columns 0..3 completely
        for col in 0..3 {
            for _ in 0..crate::connect_four::ROWS {
                board.drop_piece(col, Side::Human).unwrap();
            }
        }

        let mut agent = agent();
        for _ in 0..50 {
            let col = agent.select_column(&mut board, Side::Computer);
            assert!(!board.is_column_full(col), "picked full column {col}");
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::new();
        // Computer has three on the bottom row at columns 0..2
        for col in 0..3 {
            board.drop_piece(col, Side::Computer).unwrap();
        }
        // And the human threatens vertically in column 6
        for _ in 0..3 {
            board.drop_piece(6, Side::Human).unwrap();
        }

        // The win must beat the block, every time
        let mut agent = agent();
        for _ in 0..50 {
            assert_eq!(agent.select_column(&mut board, Side::Computer), 3);
        }
    }

    #[test]
    fn test_blocks_opponent_win() {
        let mut board = Board::new();
        // Human has three on the bottom row at columns 0..2; the computer
        // has no win of its own, so column 3 is the forced block.
        for col in 0..3 {
            board.drop_piece(col, Side::Human).unwrap();
        }

        let mut agent = agent();
        for _ in 0..50 {
            assert_eq!(agent.select_column(&mut board, Side::Computer), 3);
        }
    }

    /// Human pieces at (5,1), (4,2), (3,3) aim along the ↗ diagonal at
    /// (2,4). With column 4 filled to height two its open cell is (3,4):
    /// playing there hands the human the diagonal on the cell above.
    fn diagonal_give_away() -> Board {
        let mut board = Board::new();
        board.drop_piece(1, Side::Human).unwrap(); // (5, 1)
        board.drop_piece(2, Side::Computer).unwrap(); // (5, 2)
        board.drop_piece(2, Side::Human).unwrap(); // (4, 2)
        board.drop_piece(3, Side::Computer).unwrap(); // (5, 3)
        board.drop_piece(3, Side::Computer).unwrap(); // (4, 3)
        board.drop_piece(3, Side::Human).unwrap(); // (3, 3)
        board.drop_piece(4, Side::Computer).unwrap(); // (5, 4)
        board.drop_piece(4, Side::Computer).unwrap(); // (4, 4)
        board
    }

    #[test]
    fn test_avoids_giving_away_a_win() {
        let mut board = diagonal_give_away();

        let mut agent = agent();
        for _ in 0..100 {
            let col = agent.select_column(&mut board, Side::Computer);
            assert_ne!(col, 4, "walked into a diagonal give-away");
        }
    }

    #[test]
    fn test_tier3_taken_when_nothing_else_left() {
        let mut board = diagonal_give_away();
        // Fill every other column with a mix that creates no threat on the
        // lines through (3,4) or (2,4), leaving only the bad column open.
        for (col, fill) in [
            (0, "chchch"),
            (1, "hchch"),
            (2, "chch"),
            (3, "chc"),
            (5, "chchch"),
            (6, "hchchc"),
        ] {
            for ch in fill.chars() {
                let side = if ch == 'c' { Side::Computer } else { Side::Human };
                board.drop_piece(col, side).unwrap();
            }
        }
        assert_eq!(board.open_row(4), Some(3));

        let mut agent = agent();
        assert_eq!(agent.select_column(&mut board, Side::Computer), 4);
    }

    #[test]
    fn test_board_restored_after_evaluation() {
        let mut board = Board::new();
        board.drop_piece(0, Side::Human).unwrap();
        board.drop_piece(3, Side::Computer).unwrap();
        board.drop_piece(3, Side::Human).unwrap();
        board.drop_piece(6, Side::Computer).unwrap();
        let before = board;

        let mut agent = agent();
        agent.select_column(&mut board, Side::Computer);

        // Owners and winning flags both, cell for cell
        assert_eq!(board, before);
    }

    #[test]
    fn test_seeded_agent_is_deterministic() {
        let mut a = TieredAgent::from_seed(42);
        let mut b = TieredAgent::from_seed(42);
        let mut board_a = Board::new();
        let mut board_b = Board::new();

        for _ in 0..10 {
            let ca = a.select_column(&mut board_a, Side::Computer);
            let cb = b.select_column(&mut board_b, Side::Computer);
            assert_eq!(ca, cb);
            board_a.drop_piece(ca, Side::Computer).unwrap();
            board_b.drop_piece(cb, Side::Computer).unwrap();
        }
    }
}
