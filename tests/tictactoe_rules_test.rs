//! Tic-tac-toe rules through the public API.

mod common;

use duel_games::tictactoe::{
    Action, Board, GameState, Move, MoveError, Player, Position, Square, detect_winner, is_draw,
};
use duel_games::{GameEvent, Outcome, RejectionKind, Status, TurnBased, reduce};

const E: Square = Square::Empty;
const X: Square = Square::Occupied(Player::X);
const O: Square = Square::Occupied(Player::O);

fn play(moves: &[usize]) -> GameState {
    moves.iter().fold(GameState::new(), |state, &index| {
        let mv = Move::new(state.current_player(), index);
        state.apply(&Action::Place(mv)).unwrap().into_state()
    })
}

#[test]
fn test_top_row_detected() {
    common::init_tracing();
    let board = Board::from_squares([X, X, X, E, E, E, E, E, E]);
    let line = detect_winner(&board).unwrap();
    assert_eq!(line.player(), Player::X);
    assert_eq!(line.indices(), [0, 1, 2]);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = Board::from_squares([X, O, X, X, O, O, O, X, X]);
    assert_eq!(detect_winner(&board), None);
    assert!(is_draw(&board));
}

#[test]
fn test_occupied_square_rejected() {
    let board = Board::new().apply_move(4, Player::X).unwrap();
    assert_eq!(
        board.apply_move(4, Player::O),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(board.apply_move(9, Player::O), Err(MoveError::OutOfRange(9)));
}

#[test]
fn test_played_out_draw() {
    common::init_tracing();
    // X O X / X O O / O X X
    let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(state.status(), Status::Finished(Outcome::Draw));
    assert_eq!(state.win_line(), None);
    assert_eq!(state.scores().draws(), 1);
}

#[test]
fn test_finished_game_is_absorbing() {
    let state = play(&[0, 3, 1, 4, 2]);
    assert_eq!(state.status().winner(), Some(Player::X));

    let t = reduce(&state, &Action::Place(Move::new(Player::O, 8)));
    assert_eq!(t.state(), &state);
    assert_eq!(t.events(), &[GameEvent::Rejected(RejectionKind::InvalidMove)]);
}

#[test]
fn test_new_game_keeps_scores() {
    let state = play(&[0, 3, 1, 4, 2]);
    let t = state.apply(&Action::NewGame).unwrap();
    assert_eq!(t.events(), &[GameEvent::NewRound]);

    let fresh = t.state();
    assert_eq!(fresh.board(), &Board::new());
    assert_eq!(fresh.current_player(), Player::X);
    assert_eq!(fresh.status(), Status::InProgress);
    assert_eq!(fresh.scores().wins(Player::X), 1);
}
