use std::fmt;

use super::error::InvalidMoveError;
use super::types::{BOARD_SIDE, CELL_COUNT, GameStatus, Mark, Position, WinningLine};
use super::win_detector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from explicit cells without checking turn parity.
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, position: Position) -> Mark {
        self.cells[position.index()]
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), InvalidMoveError> {
        let position = Position::new(index).ok_or(InvalidMoveError::OutOfRange { index })?;
        self.place(position, mark)
    }

    pub fn place(&mut self, position: Position, mark: Mark) -> Result<(), InvalidMoveError> {
        if mark == Mark::Empty {
            return Err(InvalidMoveError::EmptyMark);
        }
        if self.get(position) != Mark::Empty {
            return Err(InvalidMoveError::CellOccupied { position });
        }
        self.cells[position.index()] = mark;
        Ok(())
    }

    pub(crate) fn clear(&mut self, position: Position) {
        self.cells[position.index()] = Mark::Empty;
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        Position::all()
            .filter(|&position| self.get(position) == Mark::Empty)
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn moves_played(&self) -> usize {
        CELL_COUNT - self.count(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// X moves first, so O is to move exactly when X is one mark ahead.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    pub fn evaluate(&self) -> GameStatus {
        win_detector::evaluate(self)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        win_detector::check_win_with_line(self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let line: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Mark::Empty => format!(" {} ", row * BOARD_SIDE + col + 1),
                    mark => format!(" {} ", mark),
                })
                .collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

/// Starts a new match: an empty board.
pub fn reset() -> Board {
    Board::new()
}

pub fn apply_move(board: &mut Board, index: usize, mark: Mark) -> Result<(), InvalidMoveError> {
    board.apply_move(index, mark)
}

pub fn get_available_moves(board: &Board) -> Vec<Position> {
    board.legal_moves()
}
