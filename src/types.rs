use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// One of the two player marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// First player's mark.
    A,
    /// Second player's mark.
    B,
}

impl Mark {
    /// Seat index of the player owning this mark.
    pub fn seat(self) -> usize {
        match self {
            Mark::A => 0,
            Mark::B => 1,
        }
    }
}

/// A board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    /// Encodes the cell for the page: 0=empty, 1=mark A, 2=mark B.
    pub fn to_u8(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Marked(Mark::A) => 1,
            Cell::Marked(Mark::B) => 2,
        }
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// A participant. Immutable once created by `GameEngine::start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    pub(crate) fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// Lifecycle of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Draw,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Draw)
    }
}

/// Status events emitted to the presentation layer.
///
/// `Display` renders the exact text the page shows in its message area.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Notification {
    #[display("{name}  {symbol}  turn")]
    Turn { name: String, symbol: String },
    #[display("Congratulations 🎉🎉🎉 {name}!")]
    Victory { name: String },
    #[display("It's a draw!")]
    Draw,
}

/// Public game state returned to the presentation layer after every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Row-major cells, 0=empty, 1=mark A, 2=mark B.
    pub board: Vec<u8>,
    /// Row-major cells rendered with the configured symbols, "" when empty.
    pub symbols: Vec<String>,
    pub phase: Phase,
    pub is_game_over: bool,
    /// Contract:
    /// - `Some` only while the phase is `InProgress`.
    pub current_player: Option<String>,
    pub current_symbol: Option<String>,
    /// Contract:
    /// - `Some` only when the phase is `Won`.
    pub winner: Option<String>,
    pub winning_line: Option<[usize; 3]>,
    pub message: Option<String>,
    /// Accepted move indices in play order.
    pub history: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_text_matches_message_area_format() {
        let turn = Notification::Turn {
            name: "Ann".to_string(),
            symbol: "🐙".to_string(),
        };
        let victory = Notification::Victory {
            name: "Bob".to_string(),
        };

        assert_eq!(turn.to_string(), "Ann  🐙  turn");
        assert_eq!(victory.to_string(), "Congratulations 🎉🎉🎉 Bob!");
        assert_eq!(Notification::Draw.to_string(), "It's a draw!");
    }

    #[test]
    fn phase_string_forms_match_page_names() {
        assert_eq!(Phase::InProgress.as_ref(), "in_progress");
        assert_eq!(Phase::NotStarted.to_string(), "not_started");
        assert_eq!(Phase::Draw.as_ref(), Phase::Draw.to_string());
        assert!(Phase::Won.is_terminal());
        assert!(!Phase::InProgress.is_terminal());
    }

    #[test]
    fn cell_encoding_for_page() {
        assert_eq!(Cell::Empty.to_u8(), 0);
        assert_eq!(Cell::Marked(Mark::A).to_u8(), 1);
        assert_eq!(Cell::Marked(Mark::B).to_u8(), 2);
        assert_eq!(Mark::A.seat(), 0);
        assert_eq!(Mark::B.seat(), 1);
    }
}
