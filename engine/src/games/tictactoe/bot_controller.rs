use crate::debug_log;
use crate::games::SessionRng;
use super::board::Board;
use super::difficulty::{Difficulty, SearchPolicy, TieBreak};
use super::error::NoLegalMoveError;
use super::game_state::TicTacToeMatch;
use super::types::{GameStatus, Mark, Position};

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Position,
    /// Minimax value from the bot's side: positive wins, negative loses.
    pub score: i32,
}

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_match_state(state: &TicTacToeMatch) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.current_mark(),
        }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Result<Position, NoLegalMoveError> {
    best_move(&input.board, input.current_mark, difficulty, rng).map(|scored| scored.position)
}

pub fn best_move(
    board: &Board,
    ai_mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<ScoredMove, NoLegalMoveError> {
    best_move_with_policy(board, ai_mark, difficulty.policy(), rng)
}

pub fn best_move_with_policy(
    board: &Board,
    ai_mark: Mark,
    policy: SearchPolicy,
    rng: &mut SessionRng,
) -> Result<ScoredMove, NoLegalMoveError> {
    let scored = score_moves(board, ai_mark, policy.max_depth)?;

    let best_score = scored
        .iter()
        .map(|m| m.score)
        .max()
        .ok_or(NoLegalMoveError)?;
    let tied: Vec<ScoredMove> = scored
        .iter()
        .copied()
        .filter(|m| m.score == best_score)
        .collect();

    let chosen = match policy.tie_break {
        TieBreak::LowestIndex => tied.first(),
        TieBreak::Random => rng.choose(&tied),
    }
    .copied()
    .ok_or(NoLegalMoveError)?;

    debug_log!(
        "Bot {} depth {}: {} candidates, {} tied at {}, chose {}",
        ai_mark,
        policy.max_depth,
        scored.len(),
        tied.len(),
        best_score,
        chosen.position
    );

    Ok(chosen)
}

/// Scores every legal move for `ai_mark`, in ascending cell order.
///
/// Each root move is searched with a full alpha-beta window so the scores
/// are exact and comparable with each other.
pub fn score_moves(
    board: &Board,
    ai_mark: Mark,
    max_depth: usize,
) -> Result<Vec<ScoredMove>, NoLegalMoveError> {
    let opponent_mark = ai_mark.opponent().ok_or(NoLegalMoveError)?;
    if board.evaluate().is_over() {
        return Err(NoLegalMoveError);
    }

    let available_moves = board.legal_moves();
    if available_moves.is_empty() {
        return Err(NoLegalMoveError);
    }

    let mut board = *board;
    let mut scored = Vec::with_capacity(available_moves.len());

    for position in available_moves {
        board
            .place(position, ai_mark)
            .map_err(|_| NoLegalMoveError)?;

        let score = minimax(
            &mut board,
            1,
            max_depth,
            opponent_mark,
            ai_mark,
            i32::MIN,
            i32::MAX,
        );

        board.clear(position);
        scored.push(ScoredMove { position, score });
    }

    Ok(scored)
}

fn terminal_score(status: GameStatus, ai_mark: Mark, ply: usize) -> Option<i32> {
    let ply = ply as i32;
    match status {
        GameStatus::InProgress => None,
        GameStatus::Draw => Some(0),
        GameStatus::XWon | GameStatus::OWon if status.winner() == Some(ai_mark) => {
            Some(WIN_SCORE - ply)
        }
        GameStatus::XWon | GameStatus::OWon => Some(ply - WIN_SCORE),
    }
}

fn minimax(
    board: &mut Board,
    ply: usize,
    max_depth: usize,
    to_move: Mark,
    ai_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(score) = terminal_score(board.evaluate(), ai_mark, ply) {
        return score;
    }

    if ply >= max_depth {
        return 0;
    }

    let Some(next_mark) = to_move.opponent() else {
        return 0;
    };
    let is_maximizing = to_move == ai_mark;
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for position in board.legal_moves() {
        if board.place(position, to_move).is_err() {
            continue;
        }
        let eval = minimax(board, ply + 1, max_depth, next_mark, ai_mark, alpha, beta);
        board.clear(position);

        if is_maximizing {
            best = best.max(eval);
            alpha = alpha.max(eval);
        } else {
            best = best.min(eval);
            beta = beta.min(eval);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}
