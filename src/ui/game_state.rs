//! Game session: board ownership, turns, machine pacing and results
//!
//! Nothing here touches egui, so the whole flow is testable headless.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::rules::{check_win, validate_move, winning_line, MoveError};
use crate::{AIEngine, Board, EngineConfig, MoveResult, Pos, Stone};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Stone::Black,
        }
    }
}

impl GameMode {
    /// Flip between hotseat and playing the machine as Black
    pub fn toggled(self) -> Self {
        match self {
            GameMode::PvP => GameMode::default(),
            GameMode::PvE { .. } => GameMode::PvP,
        }
    }
}

/// Session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Pause before the machine plays its move
    pub ai_delay: Duration,
    pub engine: EngineConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ai_delay: Duration::from_millis(500),
            engine: EngineConfig::default(),
        }
    }
}

/// Machine move pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    Idle,
    /// Move scheduled for `due`
    Pending { due: Instant },
}

/// How the game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Win(GameResult),
    /// Board filled without a five
    Draw,
}

/// Winning side and every cell of its line(s)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Stone,
    pub winning_cells: BTreeSet<Pos>,
}

/// Rejected placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("game is over")]
    GameOver,
    #[error("not your turn")]
    NotYourTurn,
    #[error(transparent)]
    Invalid(#[from] MoveError),
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Stone,
    pub game_over: Option<GameOutcome>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    engine: AIEngine,
    config: SessionConfig,
}

impl GameState {
    pub fn new(mode: GameMode, config: SessionConfig) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_turn: Stone::Black,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            suggested_move: None,
            message: None,
            engine: AIEngine::with_config(config.engine),
            config,
        }
    }

    /// Clear the board and start again with Black to move
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_turn = Stone::Black;
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.suggested_move = None;
        self.message = None;
        info!(mode = ?self.mode, "new game");
    }

    /// Switch mode; always restarts the game
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn == human_color,
            GameMode::PvP => true,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Machine move scheduled but not yet played
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Pending { .. })
    }

    /// Winning cells of a finished game
    pub fn winning_cells(&self) -> Option<&BTreeSet<Pos>> {
        match &self.game_over {
            Some(GameOutcome::Win(result)) => Some(&result.winning_cells),
            _ => None,
        }
    }

    /// Human placement at raw coordinates
    pub fn try_place_at(&mut self, row: i32, col: i32) -> Result<(), PlaceError> {
        let result = self.check_turn().and_then(|()| {
            validate_move(&self.board, row, col).map_err(PlaceError::from)
        });
        match result {
            Ok(pos) => {
                self.execute_move(pos);
                Ok(())
            }
            Err(err) => {
                warn!(row, col, %err, "placement rejected");
                Err(err)
            }
        }
    }

    /// Human placement at a board cell
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), PlaceError> {
        self.try_place_at(i32::from(pos.row), i32::from(pos.col))
    }

    fn check_turn(&self) -> Result<(), PlaceError> {
        if self.game_over.is_some() {
            return Err(PlaceError::GameOver);
        }
        if !self.is_human_turn() {
            return Err(PlaceError::NotYourTurn);
        }
        Ok(())
    }

    /// Place the current player's stone and settle the outcome
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_turn;

        self.board.place_stone(pos, color);
        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;

        if check_win(&self.board, pos, color) {
            let winning_cells = winning_line(&self.board);
            info!(winner = color.name(), %pos, cells = winning_cells.len(), "five in a row");
            self.game_over = Some(GameOutcome::Win(GameResult {
                winner: color,
                winning_cells,
            }));
            return;
        }

        if self.board.is_full() {
            info!("board full, draw");
            self.game_over = Some(GameOutcome::Draw);
            return;
        }

        self.current_turn = color.opponent();
    }

    /// Drive the machine: schedule its move, then play it once the delay passed.
    ///
    /// Returns `true` when a stone was placed.
    pub fn poll_ai(&mut self, now: Instant) -> bool {
        if self.game_over.is_some() || !self.is_ai_turn() {
            self.ai_state = AiState::Idle;
            return false;
        }

        let due = match self.ai_state {
            AiState::Pending { due } => due,
            AiState::Idle => {
                let due = now + self.config.ai_delay;
                debug!(delay_ms = self.config.ai_delay.as_millis() as u64, "machine move scheduled");
                self.ai_state = AiState::Pending { due };
                due
            }
        };
        if now < due {
            return false;
        }

        self.ai_state = AiState::Idle;
        let result = self.engine.get_move_with_stats(&self.board, self.current_turn);
        let best = result.best_move;
        self.last_ai_result = Some(result);

        match best {
            Some(pos) => {
                self.execute_move(pos);
                true
            }
            None => {
                self.message = Some("AI could not find a move".to_string());
                false
            }
        }
    }

    /// Time left before a scheduled machine move
    pub fn ai_remaining(&self, now: Instant) -> Option<Duration> {
        match self.ai_state {
            AiState::Pending { due } => Some(due.saturating_duration_since(now)),
            AiState::Idle => None,
        }
    }

    /// Suggest a move for the side to play
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || !self.is_human_turn() {
            return;
        }

        let result = self.engine.get_move_with_stats(&self.board, self.current_turn);
        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Take back the last move; against the machine, back to the human's turn
    pub fn undo(&mut self) {
        if self.move_history.is_empty() {
            return;
        }

        self.move_history.pop();
        if matches!(self.mode, GameMode::PvE { .. }) {
            while !self.move_history.is_empty() && !self.turn_after_history_is_human() {
                self.move_history.pop();
            }
        }

        // Simple undo: reset and replay
        let moves = std::mem::take(&mut self.move_history);
        self.board.clear();
        self.current_turn = Stone::Black;
        self.game_over = None;
        self.last_move = None;
        self.suggested_move = None;
        self.ai_state = AiState::Idle;
        self.message = None;

        for (pos, color) in moves {
            self.board.place_stone(pos, color);
            self.move_history.push((pos, color));
            self.last_move = Some(pos);
            self.current_turn = color.opponent();
        }
        debug!(moves = self.move_history.len(), "undo");
    }

    fn turn_after_history_is_human(&self) -> bool {
        let next = self
            .move_history
            .last()
            .map_or(Stone::Black, |&(_, color)| color.opponent());
        match self.mode {
            GameMode::PvE { human_color } => next == human_color,
            GameMode::PvP => true,
        }
    }
}
