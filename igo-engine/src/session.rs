//! Handle-based access to independent games, for callers that cannot hold an `Engine` directly.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::GameConfig;
use crate::engine::{Engine, GameState, MoveOutcome};
use crate::error::GoError;
use crate::goban::BoardSize;
use crate::territory::GameScore;

/// Opaque id of a game held by [`Sessions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameHandle(u64);

impl GameHandle {
    pub fn from_id(id: u64) -> Self {
        GameHandle(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns every open game. Each game has its own board and history; nothing is shared between them.
#[derive(Debug, Default)]
pub struct Sessions {
    games: HashMap<GameHandle, Engine>,
    next_id: u64,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_game(&mut self, size: BoardSize) -> GameHandle {
        self.next_id += 1;
        let handle = GameHandle(self.next_id);
        self.games.insert(handle, Engine::new(size));
        info!(%handle, %size, "new game");
        handle
    }

    pub fn new_game_with(&mut self, config: &GameConfig) -> GameHandle {
        self.new_game(config.size)
    }

    /// Drop a game, handing back its final state.
    pub fn end_game(&mut self, handle: GameHandle) -> Result<Engine, GoError> {
        let engine = self
            .games
            .remove(&handle)
            .ok_or(GoError::UnknownGame(handle))?;
        info!(%handle, moves = engine.history().len(), "game closed");
        Ok(engine)
    }

    pub fn game(&self, handle: GameHandle) -> Result<&Engine, GoError> {
        self.games.get(&handle).ok_or(GoError::UnknownGame(handle))
    }

    pub fn game_mut(&mut self, handle: GameHandle) -> Result<&mut Engine, GoError> {
        self.games
            .get_mut(&handle)
            .ok_or(GoError::UnknownGame(handle))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    // -- Game operations by handle --

    pub fn play(&mut self, handle: GameHandle, x: u8, y: u8) -> Result<MoveOutcome, GoError> {
        self.game_mut(handle)?.play((x, y))
    }

    pub fn pass(&mut self, handle: GameHandle) -> Result<MoveOutcome, GoError> {
        self.game_mut(handle)?.pass()
    }

    /// Returns whether a move was taken back.
    pub fn undo(&mut self, handle: GameHandle) -> Result<bool, GoError> {
        Ok(self.game_mut(handle)?.undo())
    }

    pub fn toggle_dead(&mut self, handle: GameHandle, x: u8, y: u8) -> Result<(), GoError> {
        self.game_mut(handle)?.toggle_dead((x, y))
    }

    pub fn current_state(&self, handle: GameHandle) -> Result<GameState, GoError> {
        Ok(self.game(handle)?.game_state())
    }

    pub fn score(&self, handle: GameHandle) -> Result<GameScore, GoError> {
        self.game(handle)?.score()
    }
}
