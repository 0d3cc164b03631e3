use serde::{Deserialize, Serialize};

use crate::goban::BoardSize;

/// Settings for a new game, e.g. `{"size": 19}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: BoardSize,
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: BoardSize::Nineteen,
        }
    }
}
