use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Ai,
}

impl Cell {
    /// The player owning this cell, if any
    fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Ai => Some(Player::Ai),
        }
    }
}

/// An immutable board value. Every "mutation" returns a fresh `Board`; the
/// fixed-size array keeps hypothetical moves during search off the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Lowest empty row in a column, or `None` if the column is full
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a disc in a column, returning the resulting board.
    /// Returns `None` if the column is full; `self` is never modified.
    pub fn drop_disc(&self, col: usize, player: Player) -> Option<Board> {
        let row = self.next_open_row(col)?;
        let mut next = *self;
        next.cells[row][col] = player.to_cell();
        Some(next)
    }

    /// Check if at least one column still accepts a disc
    pub fn has_valid_moves(&self) -> bool {
        (0..COLS).any(|col| !self.is_column_full(col))
    }

    /// Columns that still accept a disc, in ascending order
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Number of discs on the board
    pub fn disc_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Scan the whole board for a four-in-a-row run.
    ///
    /// Cells are visited in row-major order; from each cell the four axes are
    /// checked in a fixed order: horizontal, vertical, diagonal down-right,
    /// diagonal down-left. The first complete run decides the winner.
    pub fn winner(&self) -> Option<Player> {
        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = self.cells[row][col];
                if cell == Cell::Empty {
                    continue;
                }

                // Horizontal
                if col + 3 < COLS && (1..4).all(|i| self.cells[row][col + i] == cell) {
                    return cell.owner();
                }
                // Vertical
                if row + 3 < ROWS && (1..4).all(|i| self.cells[row + i][col] == cell) {
                    return cell.owner();
                }
                // Diagonal down-right
                if row + 3 < ROWS
                    && col + 3 < COLS
                    && (1..4).all(|i| self.cells[row + i][col + i] == cell)
                {
                    return cell.owner();
                }
                // Diagonal down-left
                if row + 3 < ROWS
                    && col >= 3
                    && (1..4).all(|i| self.cells[row + i][col - i] == cell)
                {
                    return cell.owner();
                }
            }
        }
        None
    }

    /// A full board with no winner. Win detection takes precedence: a board
    /// that is full but contains a four-in-a-row is a win, not a draw.
    pub fn is_draw(&self) -> bool {
        !self.has_valid_moves() && self.winner().is_none()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
