use serde::{Deserialize, Serialize};

use crate::Point;
use crate::ko::Ko;
use crate::stone::Stone;
use crate::turn::Turn;

/// Running prisoner counts. `black` is the number of White stones Black has captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    pub(crate) fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// A stone removed by a capture, with the color it had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapturedStone {
    pub pos: Point,
    pub stone: Stone,
}

/// Immutable snapshot of the game right after one ply resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    turn: Turn,
    board: Vec<i8>,
    captures: Captures,
    captured: Vec<CapturedStone>,
    ko: Option<Ko>,
}

impl MoveRecord {
    pub(crate) fn new(
        turn: Turn,
        board: Vec<i8>,
        captures: Captures,
        captured: Vec<CapturedStone>,
        ko: Option<Ko>,
    ) -> Self {
        MoveRecord {
            turn,
            board,
            captures,
            captured,
            ko,
        }
    }

    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    pub fn is_pass(&self) -> bool {
        self.turn.is_pass()
    }

    /// Row-major cells of the whole board after this move.
    pub fn board(&self) -> &[i8] {
        &self.board
    }

    /// Capture totals through this move.
    pub fn captures(&self) -> Captures {
        self.captures
    }

    /// Opponent stones this move removed.
    pub fn captured(&self) -> &[CapturedStone] {
        &self.captured
    }

    /// The point banned for the next move only.
    pub fn ko(&self) -> Option<&Ko> {
        self.ko.as_ref()
    }
}

/// Append-only record of the plies of one game; the only other mutation is dropping the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    records: Vec<MoveRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub(crate) fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn turns(&self) -> impl Iterator<Item = &Turn> + '_ {
        self.records.iter().map(MoveRecord::turn)
    }

    pub fn ends_with_two_passes(&self) -> bool {
        matches!(self.records.as_slice(), [.., a, b] if a.is_pass() && b.is_pass())
    }

    /// Color to move next: Black on an empty history, otherwise the other color from the last mover.
    pub fn next_stone(&self) -> Stone {
        self.last().map_or(Stone::Black, |r| r.turn.stone.opp())
    }

    pub fn captures(&self) -> Captures {
        self.last().map(MoveRecord::captures).unwrap_or_default()
    }

    pub fn ko(&self) -> Option<&Ko> {
        self.last().and_then(MoveRecord::ko)
    }
}
