//! Connectivity over the board: chains (groups) of same-colored stones and their liberties.
//!
//! Nothing here is cached. Every query flood-fills the current board, so the
//! answers always match the live position.

use arrayvec::ArrayVec;

use crate::Point;
use crate::goban::Goban;
use crate::stone::Stone;

/// Flood-fill the chain of same-colored stones containing `point`.
///
/// Returns an empty vector when `point` is empty or off the board.
pub fn chain(goban: &Goban, point: Point) -> Vec<Point> {
    let mut visited = vec![false; goban.board().len()];
    chain_from(goban, point, &mut visited)
}

/// Chain flood-fill sharing a caller-owned visited bitmap, so several chains
/// can be collected without revisiting stones.
pub(crate) fn chain_from(goban: &Goban, point: Point, visited: &mut [bool]) -> Vec<Point> {
    let stone = match goban.stone_at(point) {
        Some(s) => s,
        None => return Vec::new(),
    };

    let mut result = Vec::new();
    let mut stack = vec![point];

    while let Some(p) = stack.pop() {
        let vi = goban.idx(p);
        if visited[vi] {
            continue;
        }
        visited[vi] = true;
        result.push(p);
        for n in goban.neighbors(p) {
            if goban.stone_at(n) == Some(stone) && !visited[goban.idx(n)] {
                stack.push(n);
            }
        }
    }

    result
}

/// Distinct empty points adjacent to any stone of `chain`.
pub fn liberties(goban: &Goban, chain: &[Point]) -> Vec<Point> {
    let mut seen = vec![false; goban.board().len()];
    let mut libs = Vec::new();
    for &p in chain {
        for n in goban.neighbors(p) {
            let ni = goban.idx(n);
            if !seen[ni] && goban.stone_at(n).is_none() {
                seen[ni] = true;
                libs.push(n);
            }
        }
    }
    libs
}

/// Number of liberties of the chain at `point`; 0 for an empty point.
pub fn liberty_count(goban: &Goban, point: Point) -> usize {
    liberties(goban, &chain(goban, point)).len()
}

/// Whether the chain at `point` has exactly one liberty.
pub fn in_atari(goban: &Goban, point: Point) -> bool {
    goban.stone_at(point).is_some() && liberty_count(goban, point) == 1
}

/// The distinct chains of color `stone` touching `point`.
pub fn neighbor_chains(goban: &Goban, point: Point, stone: Stone) -> ArrayVec<Vec<Point>, 4> {
    let mut chains = ArrayVec::new();
    let mut visited = vec![false; goban.board().len()];

    for n in goban.neighbors(point) {
        if goban.stone_at(n) != Some(stone) || visited[goban.idx(n)] {
            continue;
        }
        let ch = chain_from(goban, n, &mut visited);
        if !ch.is_empty() {
            chains.push(ch);
        }
    }

    chains
}

/// Every chain on the board, each listed once.
pub fn all_chains(goban: &Goban) -> Vec<Vec<Point>> {
    let mut visited = vec![false; goban.board().len()];
    let mut chains = Vec::new();
    for p in goban.points() {
        if visited[goban.idx(p)] || goban.stone_at(p).is_none() {
            continue;
        }
        chains.push(chain_from(goban, p, &mut visited));
    }
    chains
}
