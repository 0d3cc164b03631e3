use igo_engine::{BoardSize, Engine, GameConfig, History, Point, Stone};
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;

/// Star points for a board size as a JSON array of `[x, y]` pairs.
/// On an unsupported size: `{ "error": "message" }`
#[wasm_bindgen]
pub fn hoshi_json(size: u8) -> String {
    match BoardSize::try_from(size) {
        Ok(size) => to_json(&points_json(igo_engine::hoshi_points(size))),
        Err(e) => error_json(&e),
    }
}

#[wasm_bindgen]
pub struct WasmGame {
    inner: Engine,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(size: u8) -> Result<WasmGame, JsError> {
        let size = BoardSize::try_from(size)?;
        Ok(Self {
            inner: Engine::new(size),
        })
    }

    /// Build from a JSON config such as `{"size": 13}`.
    pub fn from_config(json: &str) -> Result<WasmGame, JsError> {
        let config = GameConfig::from_json(json)?;
        Ok(Self {
            inner: Engine::from_config(&config),
        })
    }

    // -- Game actions --

    pub fn try_play(&mut self, x: u8, y: u8) -> bool {
        self.inner.play((x, y)).is_ok()
    }

    /// Play for the side to move. Returns the move outcome as JSON, or
    /// `{ "error": "message" }` when the move is refused.
    pub fn play(&mut self, x: u8, y: u8) -> String {
        match self.inner.play((x, y)) {
            Ok(outcome) => to_json(&outcome),
            Err(e) => error_json(&e),
        }
    }

    pub fn pass(&mut self) -> bool {
        self.inner.pass().is_ok()
    }

    pub fn undo(&mut self) -> bool {
        self.inner.undo()
    }

    // -- Engine accessors (WASM-friendly types) --

    pub fn board(&self) -> js_sys::Int8Array {
        js_sys::Int8Array::from(self.inner.board())
    }

    pub fn size(&self) -> u8 {
        self.inner.size().lines()
    }

    pub fn current_turn_stone(&self) -> i8 {
        self.inner.current_turn_stone().to_cell()
    }

    pub fn captures_black(&self) -> u32 {
        self.inner.stone_captures(Stone::Black)
    }

    pub fn captures_white(&self) -> u32 {
        self.inner.stone_captures(Stone::White)
    }

    pub fn is_legal(&self, x: u8, y: u8) -> bool {
        self.inner.is_legal((x, y))
    }

    pub fn has_ko(&self) -> bool {
        self.inner.ko().is_some()
    }

    pub fn ko_x(&self) -> i8 {
        self.inner.ko().map_or(-1, |ko| ko.pos.0 as i8)
    }

    pub fn ko_y(&self) -> i8 {
        self.inner.ko().map_or(-1, |ko| ko.pos.1 as i8)
    }

    pub fn move_count(&self) -> usize {
        self.inner.history().len()
    }

    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    pub fn stage(&self) -> String {
        self.inner.stage().to_string()
    }

    /// The whole renderable state as JSON.
    pub fn state_json(&self) -> String {
        to_json(&self.inner.game_state())
    }

    // -- History --

    pub fn moves_json(&self) -> String {
        to_json(&self.inner.moves())
    }

    pub fn history_json(&self) -> String {
        to_json(self.inner.history())
    }

    /// Replace the game with a saved history. Returns false if the JSON does not
    /// describe a game on this board.
    pub fn load_history(&mut self, json: &str) -> bool {
        let Ok(history) = serde_json::from_str::<History>(json) else {
            return false;
        };
        match Engine::from_history(self.inner.size(), history) {
            Ok(engine) => {
                self.inner = engine;
                true
            }
            Err(_) => false,
        }
    }

    // -- Scoring --

    /// Mark or unmark the chain at (x, y) as dead. Only after two passes.
    pub fn toggle_dead(&mut self, x: u8, y: u8) -> bool {
        self.inner.toggle_dead((x, y)).is_ok()
    }

    /// JSON array of `[x, y]` pairs marked dead.
    pub fn dead_stones_json(&self) -> String {
        to_json(&points_json(self.inner.game_state().dead_stones))
    }

    /// JSON array of ownership values (1=Black, -1=White, 0=neutral), row-major.
    pub fn territory_json(&self) -> String {
        let ownership: Vec<i8> = self
            .inner
            .territory()
            .into_iter()
            .map(Stone::cell_of)
            .collect();
        to_json(&ownership)
    }

    /// Returns JSON score object:
    /// {"black":{"territory":n,"captures":n},"white":{"territory":n,"captures":n},"result":"B+3"}
    pub fn score_json(&self) -> String {
        match self.inner.score() {
            Ok(gs) => to_json(&json!({
                "black": gs.black,
                "white": gs.white,
                "result": gs.result(),
            })),
            Err(e) => error_json(&e),
        }
    }
}

fn points_json(points: Vec<Point>) -> Vec<[u8; 2]> {
    points.into_iter().map(|(x, y)| [x, y]).collect()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| error_json(&e))
}

fn error_json(e: &dyn std::fmt::Display) -> String {
    json!({ "error": e.to_string() }).to_string()
}
