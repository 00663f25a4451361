use super::side::Side;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// The logical Connect Four grid: per cell an owner and a winning flag.
/// Row 0 is the top, row 5 is the bottom. Pieces obey gravity: a cell is
/// occupied only if every cell below it in the same column is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    owners: [[Option<Side>; COLS]; ROWS],
    winning: [[bool; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            owners: [[None; COLS]; ROWS],
            winning: [[false; COLS]; ROWS],
        }
    }

    /// Get the owner of a cell, or `None` if it is empty
    pub fn get(&self, row: usize, col: usize) -> Option<Side> {
        self.owners[row][col]
    }

    /// Whether the cell belongs to the most recently detected four-in-a-row
    pub fn is_winning(&self, row: usize, col: usize) -> bool {
        self.winning[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.owners[0][col].is_some()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// The lowest empty row in a column, or `None` if the column is full
    /// or out of range
    pub fn open_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.owners[row][col].is_none())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, side: Side) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        let row = self.open_row(col).ok_or(MoveError::ColumnFull)?;
        self.owners[row][col] = Some(side);
        Ok(row)
    }

    /// Remove a piece from a cell. Only meaningful for undoing a placement
    /// made earlier in the same lookahead pass.
    pub fn lift_piece(&mut self, row: usize, col: usize) {
        self.owners[row][col] = None;
    }

    /// Run `f` with a piece temporarily placed at (row, col). The cell is
    /// emptied again before this returns, whatever `f` does.
    pub fn with_piece<R>(
        &mut self,
        row: usize,
        col: usize,
        side: Side,
        f: impl FnOnce(&mut Board) -> R,
    ) -> R {
        debug_assert!(self.owners[row][col].is_none(), "cell already occupied");
        self.owners[row][col] = Some(side);
        let result = f(self);
        self.lift_piece(row, col);
        result
    }

    /// Reset every winning flag (new game, or cleanup after lookahead)
    pub fn clear_winning(&mut self) {
        self.winning = [[false; COLS]; ROWS];
    }

    /// Check if the last move at (row, col) resulted in a win.
    ///
    /// Scans the four full lines through the cell in a fixed order:
    /// diagonal ↘, diagonal ↗, the row, the column. The first line holding
    /// four consecutive same-owner cells has those cells flagged as winning
    /// and ends the scan.
    pub fn check_win(&mut self, row: usize, col: usize) -> bool {
        self.scan_line(&diag_down_cells(row, col))
            || self.scan_line(&diag_up_cells(row, col))
            || self.scan_line(&row_cells(row))
            || self.scan_line(&col_cells(col))
    }

    /// Scan one ordered line of cells for a run of four. An empty cell breaks
    /// the run; a different owner starts a new run of one.
    fn scan_line(&mut self, cells: &[(usize, usize)]) -> bool {
        let mut count = 0;
        let mut last: Option<Side> = None;
        let mut run: Vec<(usize, usize)> = Vec::with_capacity(4);

        for &(r, c) in cells {
            match self.owners[r][c] {
                None => {
                    count = 0;
                    run.clear();
                }
                owner if owner == last => {
                    count += 1;
                    run.push((r, c));
                }
                _ => {
                    count = 1;
                    run.clear();
                    run.push((r, c));
                }
            }
            last = self.owners[r][c];

            if count == 4 {
                for &(wr, wc) in &run {
                    self.winning[wr][wc] = true;
                }
                return true;
            }
        }
        false
    }
}

/// Cells of the ↘ diagonal through (row, col), top-left to bottom-right
fn diag_down_cells(row: usize, col: usize) -> Vec<(usize, usize)> {
    let d = row as isize - col as isize;
    (0..ROWS as isize)
        .filter_map(|r| {
            let c = r - d;
            (0..COLS as isize).contains(&c).then(|| (r as usize, c as usize))
        })
        .collect()
}

/// Cells of the ↗ diagonal through (row, col), top-right to bottom-left
fn diag_up_cells(row: usize, col: usize) -> Vec<(usize, usize)> {
    let s = row + col;
    (0..ROWS)
        .filter_map(|r| {
            let c = s.checked_sub(r)?;
            (c < COLS).then_some((r, c))
        })
        .collect()
}

fn row_cells(row: usize) -> Vec<(usize, usize)> {
    (0..COLS).map(|c| (row, c)).collect()
}

fn col_cells(col: usize) -> Vec<(usize, usize)> {
    (0..ROWS).map(|r| (r, col)).collect()
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
