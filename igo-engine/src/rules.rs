//! Move legality and resolution: occupancy, simple ko, suicide and captures.

use crate::Point;
use crate::chain::{chain, in_atari, liberties, liberty_count, neighbor_chains};
use crate::error::GoError;
use crate::goban::Goban;
use crate::ko::Ko;
use crate::stone::Stone;

/// What a resolved stone placement did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub captured: Vec<Point>,
    pub ko: Option<Ko>,
}

/// Stones that `stone` at `point` would capture, evaluated as if the stone were
/// already on the board: an adjacent opponent chain dies when `point` is its last liberty.
pub fn captured_by(goban: &Goban, point: Point, stone: Stone) -> Vec<Point> {
    let mut dead = Vec::new();
    for chain in neighbor_chains(goban, point, stone.opp()) {
        let libs = liberties(goban, &chain);
        if libs.len() == 1 && libs[0] == point {
            dead.extend(chain);
        }
    }
    dead
}

/// Whether `stone` at `point` would leave its own chain without liberties.
///
/// Only a point with no empty neighbor can be suicide. Joining a friendly chain
/// that has another liberty is safe, and so is touching an opponent chain in
/// atari, since that chain is captured.
pub fn would_be_suicide(goban: &Goban, point: Point, stone: Stone) -> bool {
    let neighbors = goban.neighbors(point);
    if goban.stone_at(point).is_some() || neighbors.iter().any(|&n| goban.stone_at(n).is_none())
    {
        return false;
    }

    let joins_living_chain = neighbors
        .iter()
        .any(|&n| goban.stone_at(n) == Some(stone) && !in_atari(goban, n));
    if joins_living_chain {
        return false;
    }

    let captures = neighbors
        .iter()
        .any(|&n| goban.stone_at(n) == Some(stone.opp()) && in_atari(goban, n));
    !captures
}

/// Check a candidate placement without touching the board.
pub fn check_move(
    goban: &Goban,
    point: Point,
    stone: Stone,
    ko: Option<&Ko>,
) -> Result<(), GoError> {
    if !goban.on_board(point) {
        return Err(GoError::NotOnBoard);
    }
    if goban.stone_at(point).is_some() {
        return Err(GoError::Overwrite);
    }
    if ko.is_some_and(|ko| ko.pos == point) {
        return Err(GoError::KoViolation);
    }
    if would_be_suicide(goban, point, stone) && captured_by(goban, point, stone).is_empty() {
        return Err(GoError::Suicide);
    }
    Ok(())
}

pub fn is_legal(goban: &Goban, point: Point, stone: Stone, ko: Option<&Ko>) -> bool {
    check_move(goban, point, stone, ko).is_ok()
}

/// Validate and apply a placement: put the stone down, remove captured chains,
/// and work out the ko point for the following move. The board is left
/// untouched when the move is illegal.
pub fn place_stone(
    goban: &mut Goban,
    point: Point,
    stone: Stone,
    ko: Option<&Ko>,
) -> Result<Resolution, GoError> {
    check_move(goban, point, stone, ko)?;

    let captured = captured_by(goban, point, stone);
    goban.set_stone(point, stone);
    for &p in &captured {
        goban.clear(p);
    }

    let ko = detect_ko(goban, point, stone, &captured);
    Ok(Resolution { captured, ko })
}

/// A ko arises when exactly one stone was captured and the capturing stone
/// stands alone with a single liberty: the captured point.
pub fn detect_ko(goban: &Goban, point: Point, stone: Stone, captured: &[Point]) -> Option<Ko> {
    let is_ko = captured.len() == 1
        && chain(goban, point).len() == 1
        && liberty_count(goban, point) == 1;

    is_ko.then(|| Ko {
        pos: captured[0],
        illegal: stone.opp(),
    })
}
