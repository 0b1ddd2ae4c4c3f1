//! Tests for the game session: move application, turn parity, reset.

use omok::{Cell, GameSession, MoveError, Player};

#[test]
fn test_fresh_session_is_empty_with_black_to_move() {
    let session = GameSession::new(3);
    assert_eq!(session.turn(), 0);
    assert_eq!(session.active_player(), Player::Black);
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(session.cell_at(row, col), Ok(Cell::Empty));
        }
    }
}

#[test]
fn test_move_on_empty_cell_places_active_players_stone() {
    let mut session = GameSession::new(3);
    let outcome = session.attempt_move(0, 0).unwrap();
    assert_eq!(outcome.cell, Cell::Stone(Player::Black));
    assert_eq!(outcome.turn, 1);
    assert_eq!(session.cell_at(0, 0), Ok(Cell::Stone(Player::Black)));
}

#[test]
fn test_move_on_occupied_cell_clears_it() {
    let mut session = GameSession::new(3);
    session.attempt_move(0, 0).unwrap();

    // White moving onto Black's stone removes it.
    let outcome = session.attempt_move(0, 0).unwrap();
    assert_eq!(outcome.cell, Cell::Empty);
    assert_eq!(outcome.turn, 2);
    assert_eq!(session.cell_at(0, 0), Ok(Cell::Empty));
}

#[test]
fn test_turn_increments_whether_placed_or_cleared() {
    let mut session = GameSession::new(3);
    session.attempt_move(1, 1).unwrap(); // placed
    assert_eq!(session.turn(), 1);
    session.attempt_move(1, 1).unwrap(); // cleared
    assert_eq!(session.turn(), 2);
    session.attempt_move(1, 1).unwrap(); // placed again
    assert_eq!(session.turn(), 3);
}

#[test]
fn test_active_player_follows_turn_parity() {
    let mut session = GameSession::new(3);
    assert_eq!(session.active_player(), Player::Black);
    session.attempt_move(0, 0).unwrap();
    assert_eq!(session.active_player(), Player::White);
    session.attempt_move(0, 1).unwrap();
    assert_eq!(session.active_player(), Player::Black);
    session.attempt_move(0, 2).unwrap();
    assert_eq!(session.active_player(), Player::White);
}

#[test]
fn test_stones_alternate_colors_on_distinct_cells() {
    let mut session = GameSession::new(3);
    session.attempt_move(0, 0).unwrap();
    session.attempt_move(1, 1).unwrap();
    session.attempt_move(2, 2).unwrap();
    assert_eq!(session.cell_at(0, 0), Ok(Cell::Stone(Player::Black)));
    assert_eq!(session.cell_at(1, 1), Ok(Cell::Stone(Player::White)));
    assert_eq!(session.cell_at(2, 2), Ok(Cell::Stone(Player::Black)));
}

#[test]
fn test_out_of_bounds_move_fails_and_leaves_state_unchanged() {
    let mut session = GameSession::new(3);
    session.attempt_move(0, 0).unwrap();
    let before = session.clone();

    for (row, col) in [(3, 0), (0, 3), (3, 3), (100, 1)] {
        let err = session.attempt_move(row, col).unwrap_err();
        assert_eq!(err, MoveError::OutOfBounds { row, col, size: 3 });
        assert_eq!(session, before, "failed move must not mutate anything");
    }
}

#[test]
fn test_out_of_bounds_query_fails() {
    let session = GameSession::new(3);
    assert_eq!(
        session.cell_at(0, 5),
        Err(MoveError::OutOfBounds {
            row: 0,
            col: 5,
            size: 3
        })
    );
}

#[test]
fn test_filling_the_whole_board_never_errors() {
    let size = 5;
    let mut session = GameSession::new(size);
    for row in 0..size {
        for col in 0..size {
            session.attempt_move(row, col).unwrap();
        }
    }
    assert_eq!(session.turn(), (size * size) as u32);
    assert_eq!(session.board().stone_count(), size * size);
}

#[test]
fn test_reset_restores_fresh_state_and_is_idempotent() {
    let mut session = GameSession::new(3);
    session.attempt_move(0, 0).unwrap();
    session.attempt_move(1, 2).unwrap();
    session.attempt_move(2, 1).unwrap();

    session.reset();
    let once = session.clone();
    assert_eq!(session.turn(), 0);
    assert_eq!(session.active_player(), Player::Black);
    assert_eq!(session.board().stone_count(), 0);

    session.reset();
    assert_eq!(session, once, "reset must be idempotent");
    assert_eq!(session, GameSession::new(3));
}

// The end-to-end scenario from the session contract, on a 3x3 board.
// The mover of the third accepted move follows turn parity (turn 2 is
// even, so Black moves), with the turn counter at 3 afterwards.
#[test]
fn test_session_scenario() {
    let mut session = GameSession::new(3);

    let outcome = session.attempt_move(0, 0).unwrap();
    assert_eq!(outcome.cell, Cell::Stone(Player::Black));
    assert_eq!(outcome.turn, 1);

    let outcome = session.attempt_move(0, 0).unwrap();
    assert_eq!(outcome.cell, Cell::Empty);
    assert_eq!(outcome.turn, 2);

    let outcome = session.attempt_move(1, 1).unwrap();
    assert_eq!(outcome.cell, Cell::Stone(Player::Black));
    assert_eq!(outcome.turn, 3);

    session.reset();
    assert_eq!(session.turn(), 0);
    assert_eq!(session.board().stone_count(), 0);

    let err = session.attempt_move(3, 0).unwrap_err();
    assert_eq!(
        err,
        MoveError::OutOfBounds {
            row: 3,
            col: 0,
            size: 3
        }
    );
    assert_eq!(session.turn(), 0);
}

#[test]
fn test_default_session_uses_default_size() {
    let session = GameSession::default();
    assert_eq!(session.board().size(), GameSession::DEFAULT_SIZE);
    assert_eq!(GameSession::DEFAULT_SIZE, 20);
}
