//! Go rules: stone placement, captures, suicide, simple ko, undo, and
//! end-of-game territory scoring with dead-stone marking.

pub mod chain;
pub mod config;
pub mod engine;
pub mod error;
pub mod goban;
pub mod history;
pub mod hoshi;
pub mod ko;
pub mod rules;
pub mod session;
pub mod stone;
pub mod territory;
pub mod turn;

/// `(x, y)`, zero-based from the top-left corner.
pub type Point = (u8, u8);

pub use config::GameConfig;
pub use engine::{Engine, GameState, MoveOutcome, Stage};
pub use error::GoError;
pub use goban::{BoardSize, Goban, Intersection};
pub use history::{CapturedStone, Captures, History, MoveRecord};
pub use hoshi::hoshi_points;
pub use ko::Ko;
pub use session::{GameHandle, Sessions};
pub use stone::Stone;
pub use territory::{GameScore, PlayerPoints};
pub use turn::{Move, Turn};
