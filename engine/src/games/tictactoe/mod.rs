mod board;
mod bot_controller;
mod difficulty;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{apply_move, get_available_moves, reset, Board};
pub use bot_controller::{
    best_move, best_move_with_policy, calculate_move, score_moves, BotInput, ScoredMove,
};
pub use difficulty::{Difficulty, SearchPolicy, TieBreak};
pub use error::{InvalidMoveError, MatchError, NoLegalMoveError};
pub use game_state::{GameMode, MatchPhase, TicTacToeMatch};
pub use types::{GameStatus, Mark, Position, WinningLine, BOARD_SIDE, CELL_COUNT};
pub use win_detector::{check_win, check_win_with_line, evaluate, WINNING_LINES};
