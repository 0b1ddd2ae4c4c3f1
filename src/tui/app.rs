//! Application state and event handling.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use omok::{Cell, GameSession};
use tracing::{debug, info, instrument, warn};

use super::chat::ChatPanel;
use super::input;

/// Which pane owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The board grid.
    Board,
    /// The chat input line.
    Chat,
}

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Stay,
    /// Exit the application.
    Quit,
}

/// Main application state.
///
/// Owns the game session explicitly — the UI pulls current state from it
/// after every mutation rather than reacting to writes.
#[derive(Debug, Getters)]
pub struct App {
    session: GameSession,
    cursor: (usize, usize),
    focus: Focus,
    chat: ChatPanel,
    status: String,
}

impl App {
    /// Creates the application around a fresh session.
    pub fn new(session: GameSession) -> Self {
        let status = format!("{} to move.", session.active_player());
        Self {
            session,
            cursor: (0, 0),
            focus: Focus::Board,
            chat: ChatPanel::new(),
            status,
        }
    }

    /// Handles a key event, routed by the focused pane.
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        match self.focus {
            Focus::Board => self.handle_board_key(key),
            Focus::Chat => self.handle_chat_key(key),
        }
    }

    fn handle_board_key(&mut self, key: KeyEvent) -> Transition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Transition::Quit,
            KeyCode::Tab => self.focus = Focus::Chat,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place_at_cursor(),
            code => {
                self.cursor = input::move_cursor(self.cursor, code, self.session.board().size());
            }
        }
        Transition::Stay
    }

    fn handle_chat_key(&mut self, key: KeyEvent) -> Transition {
        match key.code {
            KeyCode::Tab | KeyCode::Esc => self.focus = Focus::Board,
            KeyCode::Enter => self.chat.submit(),
            KeyCode::Backspace => self.chat.backspace(),
            KeyCode::Char(c) => self.chat.push_char(c),
            _ => {}
        }
        Transition::Stay
    }

    /// Attempts a move at the cursor and reports the outcome.
    #[instrument(skip(self), fields(cursor = ?self.cursor))]
    fn place_at_cursor(&mut self) {
        let (row, col) = self.cursor;
        let mover = self.session.active_player();
        match self.session.attempt_move(row, col) {
            Ok(outcome) => {
                debug!(row, col, turn = outcome.turn, "Move applied");
                let next = self.session.active_player();
                self.status = match outcome.cell {
                    Cell::Stone(_) => {
                        format!("{mover} placed a stone at ({row}, {col}). {next} to move.")
                    }
                    Cell::Empty => {
                        format!("{mover} removed the stone at ({row}, {col}). {next} to move.")
                    }
                };
            }
            Err(e) => {
                warn!(row, col, error = %e, "Move rejected");
                self.status = format!("Move rejected: {e}");
            }
        }
    }

    /// Starts a new game.
    fn new_game(&mut self) {
        info!("Starting new game");
        self.session.reset();
        self.status = format!("New game. {} to move.", self.session.active_player());
    }
}
