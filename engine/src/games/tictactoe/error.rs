use derive_more::{Display, Error};

use super::types::Position;

/// Rejected placement. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMoveError {
    #[display("Position {index} is out of range 0-8")]
    OutOfRange { index: usize },

    #[display("Cell {} is already marked", position.index())]
    CellOccupied { position: Position },

    #[display("Cannot place an empty mark")]
    EmptyMark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No legal move available: the game is already over")]
pub struct NoLegalMoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MatchError {
    #[display("Game is already over")]
    GameOver,

    #[display("Not your turn")]
    NotYourTurn,

    #[display("It is not the AI's turn")]
    NotAiTurn,

    #[display("{_0}")]
    InvalidMove(InvalidMoveError),

    #[display("{_0}")]
    NoLegalMove(NoLegalMoveError),
}

impl From<InvalidMoveError> for MatchError {
    fn from(err: InvalidMoveError) -> Self {
        MatchError::InvalidMove(err)
    }
}

impl From<NoLegalMoveError> for MatchError {
    fn from(err: NoLegalMoveError) -> Self {
        MatchError::NoLegalMove(err)
    }
}
