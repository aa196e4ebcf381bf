use crate::types::{Cell, Mark};

pub const BOARD_WIDTH: usize = 3;
pub const NUM_CELLS: usize = BOARD_WIDTH * BOARD_WIDTH;

/// Rows, then columns, then the two diagonals.
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

/// 3x3 board in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; NUM_CELLS];
    }

    /// Places `mark` at `index`.
    /// Returns `false` and leaves the board untouched when the index is out of
    /// range or the cell is already marked.
    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if *cell == Cell::Empty => {
                *cell = Cell::Marked(mark);
                true
            }
            _ => false,
        }
    }

    /// Returns a copy of all cells.
    pub fn snapshot(&self) -> [Cell; NUM_CELLS] {
        self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// First line fully occupied by `mark`, if any.
    pub fn winning_line(&self, mark: Mark) -> Option<[usize; 3]> {
        let target = Cell::Marked(mark);
        WINNING_LINES
            .into_iter()
            .find(|line| line.iter().all(|&idx| self.cells[idx] == target))
    }

    pub fn has_line(&self, mark: Mark) -> bool {
        self.winning_line(mark).is_some()
    }

    /// Converts board to `[u8; 9]` where 0=empty, 1=mark A, 2=mark B.
    pub fn to_array(&self) -> [u8; NUM_CELLS] {
        self.cells.map(Cell::to_u8)
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: [Cell; NUM_CELLS]) -> Self {
        Self { cells }
    }
}
