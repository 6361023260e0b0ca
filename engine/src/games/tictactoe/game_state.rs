use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{calculate_move, BotInput};
use super::difficulty::Difficulty;
use super::error::MatchError;
use super::types::{GameStatus, Mark, Position, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsAi,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::PlayerVsPlayer => write!(f, "pvp"),
            GameMode::PlayerVsAi => write!(f, "ai"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::PlayerVsPlayer),
            "ai" | "pve" => Ok(GameMode::PlayerVsAi),
            other => Err(format!("Unknown mode '{}', expected pvp or ai", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    WaitingForHuman,
    WaitingForAi,
    GameOver,
}

/// One match as seen by a front end. The bot itself is stateless; this
/// struct owns the board and decides whose turn it is.
#[derive(Debug, Clone)]
pub struct TicTacToeMatch {
    board: Board,
    mode: GameMode,
    difficulty: Difficulty,
    human_mark: Mark,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Position>,
}

impl TicTacToeMatch {
    /// `human_mark` decides who opens in AI mode: X always moves first.
    pub fn new(mode: GameMode, difficulty: Difficulty, human_mark: Mark) -> Self {
        let human_mark = if human_mark == Mark::Empty { Mark::X } else { human_mark };
        Self {
            board: Board::new(),
            mode,
            difficulty,
            human_mark,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn ai_mark(&self) -> Option<Mark> {
        match self.mode {
            GameMode::PlayerVsAi => self.human_mark.opponent(),
            GameMode::PlayerVsPlayer => None,
        }
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    pub fn phase(&self) -> MatchPhase {
        if self.status.is_over() {
            MatchPhase::GameOver
        } else if self.ai_mark() == Some(self.current_mark) {
            MatchPhase::WaitingForAi
        } else {
            MatchPhase::WaitingForHuman
        }
    }

    pub fn place_mark(&mut self, position: Position) -> Result<(), MatchError> {
        match self.phase() {
            MatchPhase::GameOver => Err(MatchError::GameOver),
            MatchPhase::WaitingForAi => Err(MatchError::NotYourTurn),
            MatchPhase::WaitingForHuman => self.apply(position),
        }
    }

    /// Asks the bot for its move and applies it.
    pub fn play_ai_turn(&mut self, rng: &mut SessionRng) -> Result<Position, MatchError> {
        match self.phase() {
            MatchPhase::GameOver => return Err(MatchError::GameOver),
            MatchPhase::WaitingForHuman => return Err(MatchError::NotAiTurn),
            MatchPhase::WaitingForAi => {}
        }

        let position = calculate_move(self.difficulty, BotInput::from_match_state(self), rng)?;
        self.apply(position)?;
        Ok(position)
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            self.mode = mode;
            self.reset();
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset();
    }

    fn apply(&mut self, position: Position) -> Result<(), MatchError> {
        self.board.place(position, self.current_mark)?;
        self.last_move = Some(position);
        self.status = self.board.evaluate();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}
