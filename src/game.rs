use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::types::{Cell, GameState, Mark, Notification, Phase, Player};

const SEATS: [Mark; 2] = [Mark::A, Mark::B];

/// Receives status notifications after the engine has finished updating.
pub trait GameObserver: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Why `try_play` refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("game is not in progress ({phase})")]
    NotInProgress { phase: Phase },
    #[display("cell {index} is out of range")]
    OutOfRange { index: usize },
    #[display("cell {index} is already marked")]
    Occupied { index: usize },
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The turn passed to the other player.
    Continue,
    Won { line: [usize; 3] },
    Draw,
}

pub struct GameEngine {
    board: Board,
    config: GameConfig,
    players: Option<[Player; 2]>,
    active: usize,
    phase: Phase,
    winner: Option<usize>,
    winning_line: Option<[usize; 3]>,
    history: Vec<usize>,
    last_notification: Option<Notification>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Caller contract: `config` should already have passed `GameConfig::validate`.
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            config,
            players: None,
            active: 0,
            phase: Phase::NotStarted,
            winner: None,
            winning_line: None,
            history: Vec::new(),
            last_notification: None,
            observers: Vec::new(),
        }
    }

    /// Registers an observer. Observers are called in registration order.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Starts a new game, discarding any previous one.
    pub fn start(&mut self, name1: Option<&str>, name2: Option<&str>) {
        let first = Player::new(self.config.resolve_name(name1, 0), SEATS[0]);
        let second = Player::new(self.config.resolve_name(name2, 1), SEATS[1]);

        debug!("starting game: {} vs {}", first.name(), second.name());

        self.board.reset();
        self.players = Some([first, second]);
        self.active = 0;
        self.phase = Phase::InProgress;
        self.winner = None;
        self.winning_line = None;
        self.history.clear();

        self.emit(self.turn_notification());
    }

    /// Plays the active player's mark at `index`.
    /// Returns `false` without changing anything when the move is refused.
    pub fn play_move(&mut self, index: usize) -> bool {
        match self.try_play(index) {
            Ok(_) => true,
            Err(err) => {
                debug!("move at {index} rejected: {err}");
                false
            }
        }
    }

    pub fn try_play(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.phase != Phase::InProgress {
            return Err(MoveError::NotInProgress { phase: self.phase });
        }
        let mark = SEATS[self.active];
        if !self.board.place(index, mark) {
            return Err(if self.board.get(index).is_none() {
                MoveError::OutOfRange { index }
            } else {
                MoveError::Occupied { index }
            });
        }

        self.history.push(index);
        debug!("seat {} played {index}", self.active);

        if let Some(line) = self.board.winning_line(mark) {
            self.phase = Phase::Won;
            self.winner = Some(self.active);
            self.winning_line = Some(line);
            let name = self.player_name(self.active);
            info!("{name} won with line {line:?}");
            self.emit(Notification::Victory { name });
            return Ok(MoveOutcome::Won { line });
        }

        // A single placement can only complete lines for the mover, so both
        // marks holding a line at once is unreachable.
        if self.is_draw() {
            self.phase = Phase::Draw;
            info!("game drawn after {} moves", self.history.len());
            self.emit(Notification::Draw);
            return Ok(MoveOutcome::Draw);
        }

        self.active = (self.active + 1) % SEATS.len();
        self.emit(self.turn_notification());
        Ok(MoveOutcome::Continue)
    }

    /// The player to move. `None` before the first `start`.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[self.active])
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<&Player> {
        let seat = self.winner?;
        self.players.as_ref().map(|players| &players[seat])
    }

    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> [Cell; 9] {
        self.board.snapshot()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.last_notification.as_ref()
    }

    /// Text of the last notification, as shown in the message area.
    pub fn message(&self) -> Option<String> {
        self.last_notification.as_ref().map(ToString::to_string)
    }

    pub fn to_game_state(&self) -> GameState {
        let in_progress = self.phase == Phase::InProgress;
        GameState {
            board: self.board.to_array().to_vec(),
            symbols: self
                .board
                .snapshot()
                .iter()
                .map(|cell| match cell.mark() {
                    Some(mark) => self.config.symbol(mark).to_string(),
                    None => String::new(),
                })
                .collect(),
            phase: self.phase,
            is_game_over: self.is_over(),
            current_player: self
                .current_player()
                .filter(|_| in_progress)
                .map(|player| player.name().to_string()),
            current_symbol: self
                .current_player()
                .filter(|_| in_progress)
                .map(|player| self.config.symbol(player.mark()).to_string()),
            winner: self.winner().map(|player| player.name().to_string()),
            winning_line: self.winning_line,
            message: self.message(),
            history: self.history.clone(),
        }
    }

    fn is_draw(&self) -> bool {
        self.board.is_full() && SEATS.iter().all(|&mark| !self.board.has_line(mark))
    }

    fn player_name(&self, seat: usize) -> String {
        self.players
            .as_ref()
            .map(|players| players[seat].name().to_string())
            .unwrap_or_default()
    }

    fn turn_notification(&self) -> Notification {
        Notification::Turn {
            name: self.player_name(self.active),
            symbol: self.config.symbol(SEATS[self.active]).to_string(),
        }
    }

    fn emit(&mut self, notification: Notification) {
        for observer in &self.observers {
            observer.notify(&notification);
        }
        self.last_notification = Some(notification);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
