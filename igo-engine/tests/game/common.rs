#![allow(dead_code)]

use igo_engine::{BoardSize, Engine, Point};
use tracing_subscriber::EnvFilter;

/// Route engine logs to the test harness. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("igo_engine=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// A 9x9 game with `moves` played alternately from Black. Panics on an illegal move.
pub fn nine_by_nine(moves: &[Point]) -> Engine {
    init_tracing();
    let mut engine = Engine::new(BoardSize::Nine);
    for &p in moves {
        engine
            .play(p)
            .unwrap_or_else(|e| panic!("setup move {p:?} rejected: {e}"));
    }
    engine
}

pub fn end_game(engine: &mut Engine) {
    engine.pass().unwrap();
    engine.pass().unwrap();
    assert!(engine.is_game_over());
}

/// Row-major index of `(x, y)` on a 9x9 board.
pub fn idx9((x, y): Point) -> usize {
    y as usize * 9 + x as usize
}
