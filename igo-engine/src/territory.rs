//! End-of-game scoring: dead-stone marking, territory flood-fill and the final count.

use std::collections::HashSet;

use serde::Serialize;

use crate::Point;
use crate::chain::chain;
use crate::goban::Goban;
use crate::history::Captures;
use crate::stone::Stone;

/// Toggle all stones in the chain at `point` as dead/alive.
///
/// If any stone in the chain is currently dead, removes all from `dead_stones` (marks alive).
/// Otherwise, adds all to `dead_stones` (marks dead).
/// No-op if the point has no stone.
pub fn toggle_dead_chain(goban: &Goban, dead_stones: &mut HashSet<Point>, point: Point) {
    if goban.stone_at(point).is_none() {
        return;
    }

    let chain = chain(goban, point);
    let any_dead = chain.iter().any(|pt| dead_stones.contains(pt));

    if any_dead {
        for pt in &chain {
            dead_stones.remove(pt);
        }
    } else {
        dead_stones.extend(chain);
    }
}

/// Owner of each point, in the same row-major layout as `goban.board()`.
///
/// Empty points and dead stones form regions. A region whose border of live
/// stones is all one color belongs to that color; a region touching both
/// colors, or none, is neutral. Live stones are never territory.
pub fn estimate_territory(goban: &Goban, dead_stones: &HashSet<Point>) -> Vec<Option<Stone>> {
    let size = goban.board().len();
    let is_open = |p: Point| goban.stone_at(p).is_none() || dead_stones.contains(&p);

    let mut ownership = vec![None; size];
    let mut visited = vec![false; size];

    for start in goban.points() {
        if visited[goban.idx(start)] || !is_open(start) {
            continue;
        }

        let mut region = Vec::new();
        let mut border_colors: u8 = 0; // bit 0 = Black seen, bit 1 = White seen
        let mut stack = vec![start];

        while let Some(p) = stack.pop() {
            let pi = goban.idx(p);
            if visited[pi] {
                continue;
            }
            visited[pi] = true;
            region.push(pi);

            for n in goban.neighbors(p) {
                if is_open(n) {
                    if !visited[goban.idx(n)] {
                        stack.push(n);
                    }
                    continue;
                }
                match goban.stone_at(n) {
                    Some(Stone::Black) => border_colors |= 1,
                    Some(Stone::White) => border_colors |= 2,
                    None => {}
                }
            }
        }

        let owner = match border_colors {
            1 => Some(Stone::Black),
            2 => Some(Stone::White),
            _ => None,
        };
        for pi in region {
            ownership[pi] = owner;
        }
    }

    ownership
}

/// Per-color score breakdown: territory points and prisoners (captures plus dead opponent stones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerPoints {
    pub territory: u32,
    pub captures: u32,
}

impl PlayerPoints {
    pub fn total(&self) -> u32 {
        self.territory + self.captures
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameScore {
    pub black: PlayerPoints,
    pub white: PlayerPoints,
}

impl GameScore {
    pub fn black_total(&self) -> u32 {
        self.black.total()
    }

    pub fn white_total(&self) -> u32 {
        self.white.total()
    }

    pub fn result(&self) -> String {
        format_result(self.black_total(), self.white_total())
    }
}

/// Final count for each color:
/// territory + stones it captured during play + opponent stones marked dead.
///
/// Dead stones sit inside the territory they are absorbed into, so they score
/// both as a territory point and as a prisoner.
pub fn score(
    goban: &Goban,
    ownership: &[Option<Stone>],
    captures: Captures,
    dead_stones: &HashSet<Point>,
) -> GameScore {
    let territory_of =
        |stone: Stone| ownership.iter().filter(|&&o| o == Some(stone)).count() as u32;

    let mut dead_black: u32 = 0;
    let mut dead_white: u32 = 0;
    for &pt in dead_stones {
        match goban.stone_at(pt) {
            Some(Stone::Black) => dead_black += 1,
            Some(Stone::White) => dead_white += 1,
            None => {}
        }
    }

    GameScore {
        black: PlayerPoints {
            territory: territory_of(Stone::Black),
            captures: captures.get(Stone::Black) + dead_white,
        },
        white: PlayerPoints {
            territory: territory_of(Stone::White),
            captures: captures.get(Stone::White) + dead_black,
        },
    }
}

/// Format the game result from final scores: `"B+{diff}"`, `"W+{diff}"`, or `"Draw"`.
pub fn format_result(black_score: u32, white_score: u32) -> String {
    match black_score.cmp(&white_score) {
        std::cmp::Ordering::Greater => format!("B+{}", black_score - white_score),
        std::cmp::Ordering::Less => format!("W+{}", white_score - black_score),
        std::cmp::Ordering::Equal => "Draw".to_string(),
    }
}
