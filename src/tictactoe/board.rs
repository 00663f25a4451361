pub const CELLS: usize = 9;

/// The eight completed lines on a 3x3 board: rows, columns, diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the other mark
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Get mark name for display
    pub fn name(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

pub type Cells = [Option<Mark>; CELLS];

/// The mark owning a complete line, if any
pub fn winner(cells: &Cells) -> Option<Mark> {
    WINNING_LINES.iter().find_map(|line| {
        let first = cells[line[0]]?;
        (cells[line[1]] == Some(first) && cells[line[2]] == Some(first)).then_some(first)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(winner(&[None; CELLS]), None);
    }

    #[test]
    fn test_row_winner() {
        let mut cells: Cells = [None; CELLS];
        cells[0] = Some(Mark::X);
        cells[1] = Some(Mark::X);
        cells[2] = Some(Mark::X);
        assert_eq!(winner(&cells), Some(Mark::X));
    }

    #[test]
    fn test_column_winner() {
        let mut cells: Cells = [None; CELLS];
        cells[1] = Some(Mark::O);
        cells[4] = Some(Mark::O);
        cells[7] = Some(Mark::O);
        assert_eq!(winner(&cells), Some(Mark::O));
    }

    #[test]
    fn test_diagonal_winner() {
        let mut cells: Cells = [None; CELLS];
        cells[2] = Some(Mark::X);
        cells[4] = Some(Mark::X);
        cells[6] = Some(Mark::X);
        assert_eq!(winner(&cells), Some(Mark::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut cells: Cells = [None; CELLS];
        cells[0] = Some(Mark::X);
        cells[1] = Some(Mark::O);
        cells[2] = Some(Mark::X);
        assert_eq!(winner(&cells), None);
    }
}
