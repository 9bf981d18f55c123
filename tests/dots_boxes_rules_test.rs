//! Dots & Boxes rules through the public API.

mod common;

use duel_games::dots_boxes::{Action, BoxId, GameState, LineId, Player, Topology};
use duel_games::{GameEvent, RejectionKind, TurnBased, reduce};

fn claim(state: &GameState, line: LineId) -> duel_games::Transition<GameState> {
    state
        .apply(&Action::claim(state.current_player(), line))
        .unwrap()
}

#[test]
fn test_fourth_side_scores_and_keeps_turn() {
    common::init_tracing();
    let mut state = GameState::new();
    for line in [
        LineId::horizontal(0, 0),
        LineId::horizontal(1, 0),
        LineId::vertical(0, 0),
    ] {
        state = claim(&state, line).into_state();
    }
    let mover = state.current_player();

    let t = claim(&state, LineId::vertical(0, 1));
    let next = t.state();
    assert_eq!(next.grid().square(BoxId::new(0, 0)).unwrap().owner, Some(mover));
    assert_eq!(next.scores().get(mover), 1);
    assert_eq!(next.current_player(), mover);
    assert!(t.emitted(GameEvent::ExtraTurn));
}

#[test]
fn test_whole_round_on_small_grid() {
    common::init_tracing();
    let mut state = GameState::with_topology(Topology::new(3).unwrap());
    while !state.is_game_over() {
        let line = state.grid().available_lines()[0];
        state = claim(&state, line).into_state();
    }
    let one = state.round_score(Player::One);
    let two = state.round_score(Player::Two);
    assert_eq!(one + two, 4);
    assert_eq!(state.rounds().rounds(), 1);
    assert!(state.grid().available_lines().is_empty());

    let t = reduce(&state, &Action::claim(state.current_player(), LineId::horizontal(0, 0)));
    assert_eq!(t.state(), &state);
    assert_eq!(t.events(), &[GameEvent::Rejected(RejectionKind::InvalidMove)]);

    let fresh = state.apply(&Action::NewGame).unwrap().into_state();
    assert_eq!(fresh.grid().owned_boxes(), 0);
    assert_eq!(fresh.scores(), state.scores());
    assert_eq!(fresh.rounds(), state.rounds());
}

#[test]
fn test_wrong_player_rejected() {
    let state = GameState::new();
    let t = reduce(&state, &Action::claim(Player::Two, LineId::horizontal(0, 0)));
    assert_eq!(t.state(), &state);
    assert_eq!(t.events(), &[GameEvent::Rejected(RejectionKind::InvalidMove)]);
}

#[test]
fn test_round_result_tracks_session_totals() {
    common::init_tracing();
    let mut state = GameState::with_topology(Topology::new(3).unwrap());
    for round in 0..4 {
        while !state.is_game_over() {
            let open = state.grid().available_lines();
            let line = if round % 2 == 0 { open[0] } else { open[open.len() - 1] };
            state = claim(&state, line).into_state();
        }
        let one = state.scores().get(Player::One);
        let two = state.scores().get(Player::Two);
        let expected = match one.cmp(&two) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        };
        assert_eq!(state.status().winner(), expected, "round {round}");
        assert_eq!(state.rounds().rounds(), round + 1);
        state = state.apply(&Action::NewGame).unwrap().into_state();
    }
}
