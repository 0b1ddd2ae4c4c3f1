mod session;
mod types;

pub use session::{GameSession, MoveOutcome};
pub use types::{Board, Cell, MoveError, Player};
