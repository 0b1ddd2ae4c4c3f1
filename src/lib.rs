//! Omok game session core.
//!
//! A two-player grid-placement game (Gomoku/Omok-style). This library
//! holds the session core only: the square board, whose-turn tracking,
//! move application, and reset semantics. Rendering and input live in
//! the `omok` binary, which consumes this crate.
//!
//! # Example
//!
//! ```
//! use omok::{Cell, GameSession, Player};
//!
//! let mut session = GameSession::new(20);
//! assert_eq!(session.active_player(), Player::Black);
//!
//! let outcome = session.attempt_move(9, 9)?;
//! assert_eq!(outcome.cell, Cell::Stone(Player::Black));
//! assert_eq!(session.turn(), 1);
//! # Ok::<(), omok::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;

pub use game::{Board, Cell, GameSession, MoveError, MoveOutcome, Player};
