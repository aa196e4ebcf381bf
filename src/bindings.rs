//! Entry points for the web page.
//!
//! The page owns a `WebGame`, forwards clicks and form values to it, and
//! redraws from `state()` / `board()` / `message()` after every call.

use wasm_bindgen::prelude::*;

use log::debug;

use crate::config::GameConfig;
use crate::game::GameEngine;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init_module() {
    console_error_panic_hook::set_once();
    // A logger may already be installed when the module is re-initialised.
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

#[wasm_bindgen]
pub struct WebGame {
    engine: GameEngine,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
        }
    }

    /// Builds a game from a (possibly partial) `{ symbols, default_names }` object.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<WebGame, JsValue> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        config
            .validate()
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(Self {
            engine: GameEngine::with_config(config),
        })
    }

    pub fn start(&mut self, name1: Option<String>, name2: Option<String>) {
        self.engine.start(name1.as_deref(), name2.as_deref());
    }

    /// Takes the JS number as-is so fractional, negative or non-finite
    /// indices are refused instead of being truncated to a cell.
    #[wasm_bindgen(js_name = playMove)]
    pub fn play_move(&mut self, index: f64) -> bool {
        match cell_index(index) {
            Some(index) => self.engine.play_move(index),
            None => {
                debug!("move at {index} rejected: not a cell index");
                false
            }
        }
    }

    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.engine.is_over()
    }

    pub fn phase(&self) -> String {
        self.engine.phase().as_ref().to_string()
    }

    pub fn message(&self) -> Option<String> {
        self.engine.message()
    }

    #[wasm_bindgen(js_name = currentPlayerName)]
    pub fn current_player_name(&self) -> Option<String> {
        self.engine
            .current_player()
            .map(|player| player.name().to_string())
    }

    #[wasm_bindgen(js_name = currentPlayerSymbol)]
    pub fn current_player_symbol(&self) -> Option<String> {
        self.engine
            .current_player()
            .map(|player| self.engine.config().symbol(player.mark()).to_string())
    }

    /// Row-major cells, 0=empty, 1=first player, 2=second player.
    pub fn board(&self) -> Vec<u8> {
        self.engine.board().to_array().to_vec()
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.engine.to_game_state()).map_err(JsValue::from)
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}

impl WebGame {
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }
}

fn cell_index(value: f64) -> Option<usize> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= usize::MAX as f64)
        .then_some(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_forwards_to_engine() {
        let mut game = WebGame::new();
        assert!(wasm_ready());
        assert!(!game.play_move(0.0));
        assert_eq!(game.phase(), "not_started");
        assert_eq!(game.current_player_name(), None);

        game.start(Some("  ".to_string()), None);
        assert_eq!(game.current_player_name().as_deref(), Some("Player 1"));
        assert_eq!(game.current_player_symbol().as_deref(), Some("🐙"));

        for mv in [0.0, 4.0, 1.0, 3.0, 2.0] {
            assert!(game.play_move(mv));
        }
        assert!(game.is_over());
        assert_eq!(game.phase(), "won");
        assert_eq!(game.board(), vec![1, 1, 1, 2, 2, 0, 0, 0, 0]);
        assert_eq!(
            game.message().as_deref(),
            Some("Congratulations 🎉🎉🎉 Player 1!")
        );
        assert_eq!(game.engine().history(), &[0, 4, 1, 3, 2]);
    }

    #[test]
    fn fractional_or_negative_index_is_refused() {
        let mut game = WebGame::new();
        game.start(None, None);

        assert!(!game.play_move(1.5));
        assert!(!game.play_move(-1.0));
        assert!(!game.play_move(f64::NAN));
        assert!(!game.play_move(f64::INFINITY));
        assert!(!game.play_move(9.0));
        assert_eq!(game.board(), vec![0; 9]);
        assert_eq!(game.current_player_name().as_deref(), Some("Player 1"));

        assert!(game.play_move(1.0));
        assert_eq!(game.board()[1], 1);
    }
}
