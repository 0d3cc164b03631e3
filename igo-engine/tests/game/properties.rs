use std::collections::HashSet;

use igo_engine::chain::{all_chains, chain, liberties};
use igo_engine::rules::{captured_by, would_be_suicide};
use igo_engine::{BoardSize, Engine, Goban, Point, Stone};
use proptest::prelude::*;

/// Random 9x9 positions. Not every one is reachable in a real game, which is fine for board analysis.
fn arbitrary_goban() -> impl Strategy<Value = Goban> {
    prop::collection::vec(prop_oneof![2 => Just(0i8), 1 => Just(1i8), 1 => Just(-1i8)], 81)
        .prop_map(|cells| Goban::from_board(9, cells))
}

fn arbitrary_point() -> impl Strategy<Value = Point> {
    (0u8..9, 0u8..9)
}

fn stone() -> impl Strategy<Value = Stone> {
    prop_oneof![Just(Stone::Black), Just(Stone::White)]
}

proptest! {
    #[test]
    fn liberties_ignore_visit_order(goban in arbitrary_goban()) {
        for group in all_chains(&goban) {
            let forward = liberties(&goban, &group);
            let mut reversed_group = group.clone();
            reversed_group.reverse();
            let mut backward = liberties(&goban, &reversed_group);

            let unique: HashSet<Point> = forward.iter().copied().collect();
            prop_assert_eq!(unique.len(), forward.len(), "duplicate liberty in {:?}", forward);

            let mut forward = forward;
            forward.sort_unstable();
            backward.sort_unstable();
            prop_assert_eq!(forward, backward);
        }
    }

    #[test]
    fn chains_partition_the_stones(goban in arbitrary_goban()) {
        let chains = all_chains(&goban);
        let mut seen = HashSet::new();
        for group in &chains {
            let color = goban.stone_at(group[0]);
            prop_assert!(color.is_some());
            for &p in group {
                prop_assert_eq!(goban.stone_at(p), color);
                prop_assert!(seen.insert(p), "{:?} in two chains", p);
            }
            let mut again = chain(&goban, group[0]);
            let mut expected = group.clone();
            again.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(again, expected);
        }
        let stones = goban.points().filter(|&p| goban.stone_at(p).is_some()).count();
        prop_assert_eq!(seen.len(), stones);
    }

    #[test]
    fn suicide_check_matches_placement(goban in arbitrary_goban(), p in arbitrary_point(), s in stone()) {
        prop_assume!(goban.stone_at(p).is_none());

        let mut placed = goban.clone();
        placed.set_stone(p, s);
        for q in captured_by(&goban, p, s) {
            placed.clear(q);
        }
        let dead_after_placement = liberties(&placed, &chain(&placed, p)).is_empty();

        prop_assert_eq!(would_be_suicide(&goban, p, s), dead_after_placement);
    }

    #[test]
    fn undo_walks_back_through_snapshots(moves in prop::collection::vec(prop::option::weighted(0.9, arbitrary_point()), 1..60)) {
        let mut engine = Engine::new(BoardSize::Nine);
        let mut snapshots = vec![engine.board().to_vec()];
        for m in moves {
            if engine.is_game_over() {
                break;
            }
            let played = match m {
                Some(p) => engine.play(p).is_ok(),
                None => engine.pass().is_ok(),
            };
            if played {
                snapshots.push(engine.board().to_vec());
            }
        }
        prop_assert_eq!(snapshots.len(), engine.history().len() + 1);

        while let Some(expected) = snapshots.pop() {
            prop_assert_eq!(engine.board(), expected.as_slice());
            engine.undo();
        }
        prop_assert!(engine.goban().is_empty());
        prop_assert!(engine.history().is_empty());
    }
}
