use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::Point;
use crate::config::GameConfig;
use crate::error::GoError;
use crate::goban::{BoardSize, Goban};
use crate::history::{CapturedStone, Captures, History, MoveRecord};
use crate::ko::Ko;
use crate::rules;
use crate::stone::Stone;
use crate::territory::{self, GameScore};
use crate::turn::Turn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    BlackToPlay,
    WhiteToPlay,
    Scoring,
}

impl Stage {
    pub fn is_play(&self) -> bool {
        matches!(self, Stage::BlackToPlay | Stage::WhiteToPlay)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::BlackToPlay => write!(f, "black_to_play"),
            Stage::WhiteToPlay => write!(f, "white_to_play"),
            Stage::Scoring => write!(f, "scoring"),
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black_to_play" => Ok(Stage::BlackToPlay),
            "white_to_play" => Ok(Stage::WhiteToPlay),
            "scoring" => Ok(Stage::Scoring),
            _ => Err(format!("unknown stage: {s}")),
        }
    }
}

/// What a successful play or pass did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub turn: Turn,
    pub captured: Vec<CapturedStone>,
    pub ko: Option<Ko>,
    pub stage: Stage,
}

/// Everything a renderer needs to draw the current position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<i8>,
    pub size: BoardSize,
    pub current: Stone,
    pub stage: Stage,
    pub captures: Captures,
    pub is_game_over: bool,
    pub ko: Option<Ko>,
    pub dead_stones: Vec<Point>,
}

/// One game session: the live board, its move history and the dead-stone marks
/// made while scoring.
#[derive(Debug, Clone)]
pub struct Engine {
    size: BoardSize,
    goban: Goban,
    history: History,
    dead_stones: HashSet<Point>,
}

impl Engine {
    pub fn new(size: BoardSize) -> Self {
        Engine {
            size,
            goban: Goban::with_size(size),
            history: History::new(),
            dead_stones: HashSet::new(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.size)
    }

    /// Resume a game from its recorded history. The board is taken from the
    /// last snapshot; nothing is replayed.
    pub fn from_history(size: BoardSize, history: History) -> Result<Self, GoError> {
        let cells = size.lines() as usize * size.lines() as usize;
        if history.records().iter().any(|r| r.board().len() != cells) {
            return Err(GoError::MalformedHistory);
        }

        let mut goban = Goban::with_size(size);
        if let Some(last) = history.last() {
            goban.restore(last.board());
        }

        Ok(Engine {
            size,
            goban,
            history,
            dead_stones: HashSet::new(),
        })
    }

    // -- Accessors --

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn goban(&self) -> &Goban {
        &self.goban
    }

    pub fn board(&self) -> &[i8] {
        self.goban.board()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn moves(&self) -> Vec<Turn> {
        self.history.turns().copied().collect()
    }

    pub fn ko(&self) -> Option<&Ko> {
        self.history.ko()
    }

    pub fn captures(&self) -> Captures {
        self.history.captures()
    }

    pub fn stone_captures(&self, stone: Stone) -> u32 {
        self.captures().get(stone)
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.goban.stone_at(point)
    }

    pub fn current_turn_stone(&self) -> Stone {
        self.history.next_stone()
    }

    /// Two consecutive passes end the game.
    pub fn is_game_over(&self) -> bool {
        self.history.ends_with_two_passes()
    }

    pub fn stage(&self) -> Stage {
        if self.is_game_over() {
            Stage::Scoring
        } else {
            match self.current_turn_stone() {
                Stone::Black => Stage::BlackToPlay,
                Stone::White => Stage::WhiteToPlay,
            }
        }
    }

    pub fn dead_stones(&self) -> &HashSet<Point> {
        &self.dead_stones
    }

    pub fn is_dead(&self, point: Point) -> bool {
        self.dead_stones.contains(&point)
    }

    // -- Game actions --

    /// Play for whoever is to move.
    pub fn play(&mut self, point: Point) -> Result<MoveOutcome, GoError> {
        self.try_play(self.current_turn_stone(), point)
    }

    pub fn try_play(&mut self, stone: Stone, point: Point) -> Result<MoveOutcome, GoError> {
        self.ensure_playing()?;
        if stone != self.current_turn_stone() {
            return Err(GoError::OutOfTurn);
        }

        let ko = self.history.ko().copied();
        let resolution = rules::place_stone(&mut self.goban, point, stone, ko.as_ref())
            .inspect_err(|e| trace!(%stone, ?point, "rejected move: {e}"))?;

        let captured: Vec<CapturedStone> = resolution
            .captured
            .iter()
            .map(|&pos| CapturedStone {
                pos,
                stone: stone.opp(),
            })
            .collect();
        let mut captures = self.history.captures();
        captures.add(stone, captured.len() as u32);

        let turn = Turn::play(stone, point);
        self.history.push(MoveRecord::new(
            turn,
            self.goban.board().to_vec(),
            captures,
            captured.clone(),
            resolution.ko,
        ));
        self.dead_stones.clear();

        debug!(
            %stone,
            ?point,
            captured = captured.len(),
            ko = ?resolution.ko.map(|k| k.pos),
            "played"
        );

        Ok(MoveOutcome {
            turn,
            captured,
            ko: resolution.ko,
            stage: self.stage(),
        })
    }

    /// Pass for whoever is to move.
    pub fn pass(&mut self) -> Result<MoveOutcome, GoError> {
        self.try_pass(self.current_turn_stone())
    }

    pub fn try_pass(&mut self, stone: Stone) -> Result<MoveOutcome, GoError> {
        self.ensure_playing()?;
        if stone != self.current_turn_stone() {
            return Err(GoError::OutOfTurn);
        }

        let turn = Turn::pass(stone);
        self.history.push(MoveRecord::new(
            turn,
            self.goban.board().to_vec(),
            self.history.captures(),
            Vec::new(),
            None,
        ));

        debug!(%stone, "passed");
        if self.is_game_over() {
            info!(moves = self.history.len(), "game over, scoring");
        }

        Ok(MoveOutcome {
            turn,
            captured: Vec::new(),
            ko: None,
            stage: self.stage(),
        })
    }

    /// Take back the last ply. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(undone) = self.history.pop() else {
            return false;
        };

        match self.history.last() {
            Some(record) => self.goban.restore(record.board()),
            None => self.goban.reset(),
        }
        if !self.is_game_over() {
            self.dead_stones.clear();
        }

        debug!(turn = %undone.turn(), remaining = self.history.len(), "undone");
        true
    }

    pub fn is_legal(&self, point: Point) -> bool {
        !self.is_game_over()
            && rules::is_legal(&self.goban, point, self.current_turn_stone(), self.ko())
    }

    // -- Scoring --

    /// Mark or unmark the whole chain at `point` as dead. Only once the game is over.
    pub fn toggle_dead(&mut self, point: Point) -> Result<(), GoError> {
        if !self.is_game_over() {
            return Err(GoError::InvalidPhase(self.stage()));
        }
        if !self.goban.on_board(point) {
            return Err(GoError::NotOnBoard);
        }

        territory::toggle_dead_chain(&self.goban, &mut self.dead_stones, point);
        debug!(?point, dead = self.dead_stones.len(), "toggled dead chain");
        Ok(())
    }

    /// Owner of every point (row-major) given the current dead-stone marks.
    pub fn territory(&self) -> Vec<Option<Stone>> {
        territory::estimate_territory(&self.goban, &self.dead_stones)
    }

    pub fn score(&self) -> Result<GameScore, GoError> {
        if !self.is_game_over() {
            return Err(GoError::InvalidPhase(self.stage()));
        }
        let ownership = self.territory();
        Ok(territory::score(
            &self.goban,
            &ownership,
            self.captures(),
            &self.dead_stones,
        ))
    }

    // -- Serialization --

    pub fn game_state(&self) -> GameState {
        let mut dead_stones: Vec<Point> = self.dead_stones.iter().copied().collect();
        dead_stones.sort_unstable_by_key(|&(x, y)| (y, x));

        GameState {
            board: self.goban.board().to_vec(),
            size: self.size,
            current: self.current_turn_stone(),
            stage: self.stage(),
            captures: self.captures(),
            is_game_over: self.is_game_over(),
            ko: self.ko().copied(),
            dead_stones,
        }
    }

    fn ensure_playing(&self) -> Result<(), GoError> {
        if self.is_game_over() {
            Err(GoError::InvalidPhase(Stage::Scoring))
        } else {
            Ok(())
        }
    }
}
