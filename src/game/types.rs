//! Core domain types for Omok.

use serde::{Deserialize, Serialize};

/// A stone color. Black moves on even turns, White on odd turns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Player {
    /// Black stones (moves first).
    Black,
    /// White stones (moves second).
    White,
}

impl Player {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// A cell on the Omok board.
///
/// A single tri-state mark per cell: either empty or holding exactly one
/// player's stone. A cell can never carry both colors at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a stone of the given color.
    Stone(Player),
}

/// Errors produced by board and session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate falls outside the board.
    #[display("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },
}

impl std::error::Error for MoveError {}

/// Square N x N Omok board, cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a new empty board with the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `(row, col)` lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Gets the cell at `(row, col)`, or `None` outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Sets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the coordinate is outside
    /// the board; the board is left unchanged.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), MoveError> {
        let index = self.index(row, col).ok_or(MoveError::OutOfBounds {
            row,
            col,
            size: self.size,
        })?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Checks if the cell at `(row, col)` is empty. Out-of-range
    /// coordinates are reported as not empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clears every cell back to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Counts the stones currently on the board.
    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| !matches!(c, Cell::Empty))
            .count()
    }

    /// Formats the board as a human-readable string, one row per line.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.cells[row * self.size + col] {
                    Cell::Empty => '·',
                    Cell::Stone(Player::Black) => '●',
                    Cell::Stone(Player::White) => '○',
                };
                result.push(symbol);
            }
            if row < self.size - 1 {
                result.push('\n');
            }
        }
        result
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col).then(|| row * self.size + col)
    }
}
