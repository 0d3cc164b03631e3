use igo_engine::{GoError, Stone};

use crate::common::nine_by_nine;

/// Black to play (2, 1), taking the White stone at (1, 1):
///
/// ```text
/// +BW
/// BW+W
/// +BW
/// ```
fn ko_position() -> igo_engine::Engine {
    nine_by_nine(&[
        (1, 0),
        (2, 0),
        (0, 1),
        (1, 1),
        (1, 2),
        (3, 1),
        (8, 8),
        (2, 2),
    ])
}

#[test]
fn single_stone_recapture_is_banned_for_one_move() {
    let mut engine = ko_position();
    let outcome = engine.play((2, 1)).unwrap();
    assert_eq!(outcome.captured.len(), 1);

    let ko = outcome.ko.unwrap();
    assert_eq!(ko.pos, (1, 1));
    assert_eq!(ko.illegal, Stone::White);
    assert_eq!(engine.ko(), Some(&ko));

    assert!(!engine.is_legal((1, 1)));
    assert_eq!(engine.play((1, 1)), Err(GoError::KoViolation));
    assert_eq!(engine.current_turn_stone(), Stone::White);

    // Any other move is fine.
    assert!(engine.is_legal((7, 7)));
    engine.play((7, 7)).unwrap();
    assert!(engine.ko().is_none());

    engine.play((7, 8)).unwrap();
    let outcome = engine.play((1, 1)).unwrap();
    assert_eq!(outcome.captured.len(), 1);
    assert_eq!(engine.stone_at((2, 1)), None);
    assert_eq!(engine.captures().white, 1);
}

#[test]
fn multi_stone_capture_sets_no_ko() {
    let mut engine = nine_by_nine(&[(2, 0), (1, 0), (1, 1), (0, 1), (0, 2), (8, 8)]);
    let outcome = engine.play((0, 0)).unwrap();
    assert_eq!(outcome.captured.len(), 2);
    assert!(engine.ko().is_none());
}

#[test]
fn filling_the_ko_is_legal_for_the_capturer() {
    let mut engine = ko_position();
    engine.play((2, 1)).unwrap();
    engine.play((7, 7)).unwrap();
    engine.play((1, 1)).unwrap();
    assert_eq!(engine.stone_at((1, 1)), Some(Stone::Black));
}
