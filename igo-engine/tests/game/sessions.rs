use igo_engine::{BoardSize, GameConfig, GameHandle, GoError, Sessions, Stage, Stone};

use crate::common::init_tracing;

#[test]
fn full_game_through_handles() {
    init_tracing();
    let mut sessions = Sessions::new();
    let h = sessions.new_game(BoardSize::Nine);

    for (x, y) in [(0, 1), (0, 0), (1, 0), (8, 8)] {
        sessions.play(h, x, y).unwrap();
    }
    sessions.pass(h).unwrap();
    let outcome = sessions.pass(h).unwrap();
    assert_eq!(outcome.stage, Stage::Scoring);

    let state = sessions.current_state(h).unwrap();
    assert!(state.is_game_over);
    assert_eq!(state.captures.black, 1);
    assert_eq!(state.board[8 * 9 + 8], Stone::White.to_cell());

    assert_eq!(sessions.score(h).unwrap().result(), "B+2");
}

#[test]
fn config_json_picks_the_board() {
    init_tracing();
    let mut sessions = Sessions::new();
    let config = GameConfig::from_json(r#"{"size": 13}"#).unwrap();
    let h = sessions.new_game_with(&config);
    assert_eq!(sessions.current_state(h).unwrap().board.len(), 169);
    assert_eq!(sessions.play(h, 13, 0), Err(GoError::NotOnBoard));
}

#[test]
fn operations_on_a_closed_game_fail() {
    init_tracing();
    let mut sessions = Sessions::new();
    let h = sessions.new_game(BoardSize::Nine);
    sessions.end_game(h).unwrap();

    assert_eq!(sessions.play(h, 0, 0), Err(GoError::UnknownGame(h)));
    assert_eq!(sessions.toggle_dead(h, 0, 0), Err(GoError::UnknownGame(h)));
    assert_eq!(sessions.score(h), Err(GoError::UnknownGame(h)));
}

#[test]
fn handles_serialize_as_numbers() {
    let h = GameHandle::from_id(7);
    assert_eq!(serde_json::to_string(&h).unwrap(), "7");
    let back: GameHandle = serde_json::from_str("7").unwrap();
    assert_eq!(back, h);
}
