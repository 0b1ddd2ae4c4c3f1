//! The game session: sole authority over board contents and turn progression.

use super::types::{Board, Cell, MoveError, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of an accepted move.
///
/// Reports what the target cell holds after the move and the new turn
/// value, so the caller can re-render without querying the session again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Mark the target cell holds after the move.
    pub cell: Cell,
    /// Turn counter after the move.
    pub turn: u32,
}

/// One game of Omok: a board plus a turn counter.
///
/// Turn parity is the single source of truth for whose turn it is —
/// even turns belong to Black, odd turns to White. There is no separate
/// current-player field to drift out of sync.
///
/// The session knows nothing about rendering or input. Each mutating
/// operation takes `&mut self`, so sharing a session across tasks behind
/// a lock makes every move and reset an atomic, mutually-exclusive unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    turn: u32,
}

impl GameSession {
    /// Default board side length.
    pub const DEFAULT_SIZE: usize = 20;

    /// Creates a fresh session: empty board, turn counter at zero.
    #[instrument]
    pub fn new(size: usize) -> Self {
        info!(size, "Creating new game session");
        Self {
            board: Board::new(size),
            turn: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of accepted moves so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the player whose turn it is, from turn parity.
    pub fn active_player(&self) -> Player {
        if self.turn % 2 == 0 {
            Player::Black
        } else {
            Player::White
        }
    }

    /// Gets the mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] outside the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        self.board.get(row, col).ok_or(MoveError::OutOfBounds {
            row,
            col,
            size: self.board.size(),
        })
    }

    /// Attempts a move at `(row, col)` for the active player.
    ///
    /// A move onto an empty cell places the active player's stone. A move
    /// onto any occupied cell — the mover's own stone or the opponent's —
    /// removes it. Either way the turn counter advances by exactly one,
    /// together with the cell mutation.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] outside the board; the board
    /// and turn counter are left unchanged.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let current = self.cell_at(row, col)?;
        let cell = match current {
            Cell::Empty => Cell::Stone(self.active_player()),
            Cell::Stone(_) => Cell::Empty,
        };
        self.board.set(row, col, cell)?;
        self.turn += 1;
        debug!(row, col, ?cell, turn = self.turn, "Move applied");
        Ok(MoveOutcome {
            cell,
            turn: self.turn,
        })
    }

    /// Starts a new game: clears every cell and zeroes the turn counter.
    ///
    /// Always succeeds and is idempotent.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(turn = self.turn, "Resetting game session");
        self.board.clear();
        self.turn = 0;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}
