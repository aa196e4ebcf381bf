pub mod bindings;
pub mod board;
pub mod config;
pub mod game;
pub mod types;

pub use bindings::{WebGame, wasm_ready};
pub use board::{Board, WINNING_LINES};
pub use config::{ConfigError, GameConfig};
pub use game::{GameEngine, GameObserver, MoveError, MoveOutcome};
pub use types::{Cell, GameState, Mark, Notification, Phase, Player};
