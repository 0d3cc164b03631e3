use igo_engine::{GoError, Stage, Stone};

use crate::common::{end_game, idx9, nine_by_nine};

#[test]
fn corner_capture_scores_territory_and_prisoner() {
    // Black takes the White corner stone; White's lone stone at (8, 8) keeps the open area neutral.
    let mut engine = nine_by_nine(&[(0, 1), (0, 0), (1, 0), (8, 8)]);
    assert_eq!(engine.stone_at((0, 0)), None);
    end_game(&mut engine);

    let ownership = engine.territory();
    assert_eq!(ownership[idx9((0, 0))], Some(Stone::Black));
    assert_eq!(ownership[idx9((4, 4))], None);

    let score = engine.score().unwrap();
    assert_eq!(score.black.territory, 1);
    assert_eq!(score.black.captures, 1);
    assert_eq!(score.black_total(), 2);
    assert_eq!(score.white_total(), 0);
    assert_eq!(score.result(), "B+2");
}

#[test]
fn single_color_board_is_all_territory() {
    let mut engine = nine_by_nine(&[(0, 1), (0, 0), (1, 0)]);
    end_game(&mut engine);

    let ownership = engine.territory();
    assert_eq!(ownership[idx9((0, 0))], Some(Stone::Black));

    let score = engine.score().unwrap();
    assert_eq!(score.black.territory, 79);
    assert_eq!(score.black.captures, 1);
}

#[test]
fn toggling_dead_marks_the_whole_group() {
    let mut engine = nine_by_nine(&[(2, 2), (6, 6), (8, 0), (6, 7)]);
    end_game(&mut engine);

    engine.toggle_dead((6, 7)).unwrap();
    assert!(engine.is_dead((6, 6)));
    assert!(engine.is_dead((6, 7)));
    assert_eq!(engine.game_state().dead_stones, vec![(6, 6), (6, 7)]);

    engine.toggle_dead((6, 6)).unwrap();
    assert!(engine.dead_stones().is_empty());
}

#[test]
fn dead_stones_count_as_territory_and_prisoners() {
    let mut engine = nine_by_nine(&[(2, 2), (6, 6), (8, 0), (6, 7)]);
    end_game(&mut engine);

    // Both colors touch the open area while White is alive.
    let score = engine.score().unwrap();
    assert_eq!(score.black.territory, 0);
    assert_eq!(score.white.territory, 0);

    engine.toggle_dead((6, 6)).unwrap();
    let score = engine.score().unwrap();
    // Every non-Black point, including the two dead stones, plus the two dead stones again.
    assert_eq!(score.black.territory, 79);
    assert_eq!(score.black.captures, 2);
    assert_eq!(score.white_total(), 0);
    assert_eq!(score.result(), "B+81");
}

#[test]
fn toggling_an_empty_point_changes_nothing() {
    let mut engine = nine_by_nine(&[(2, 2)]);
    end_game(&mut engine);
    engine.toggle_dead((5, 5)).unwrap();
    assert!(engine.dead_stones().is_empty());
}

#[test]
fn scoring_waits_for_the_game_to_end() {
    let mut engine = nine_by_nine(&[(2, 2)]);
    assert_eq!(engine.score(), Err(GoError::InvalidPhase(Stage::WhiteToPlay)));
    assert_eq!(
        engine.toggle_dead((2, 2)),
        Err(GoError::InvalidPhase(Stage::WhiteToPlay))
    );
}
