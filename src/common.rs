//! Common types for tic-tac-toe: marks, cells, moves, results and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::line::Line;

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    /// The human player, drawn as `O`. Moves first.
    Player,
    /// The computer opponent, drawn as `X`.
    Computer,
}

impl Mark {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
        }
    }

    /// Symbol used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'O',
            Mark::Computer => 'X',
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(m) => Some(m),
        }
    }
}

/// A board coordinate, each component in `0..BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    /// Column letter followed by a 1-based row, e.g. `B2` for the center.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col as u8) as char;
        write!(f, "{}{}", col, self.row + 1)
    }
}

/// Outcome of a board as seen by the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameResult {
    InProgress,
    PlayerWins(Line),
    ComputerWins(Line),
    Draw,
}

impl GameResult {
    /// Returns `true` for every result except `InProgress`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameResult::PlayerWins(line) | GameResult::ComputerWins(line) => Some(*line),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }

    /// The side that won, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::PlayerWins(_) => Some(Mark::Player),
            GameResult::ComputerWins(_) => Some(Mark::Computer),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }
}

/// Errors returned by Board, selector and engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (coordinates off the board).
    BitBoardError(BitBoardError),
    /// Target cell already holds a mark.
    CellOccupied,
    /// The game has concluded; no further moves are accepted.
    GameOver,
    /// The move was made by the side that is not to move.
    OutOfTurn,
    /// Move selection was requested with no empty cell or a finished game.
    NoLegalMove,
    /// A snapshot that cannot arise from alternating play.
    InconsistentState,
}

impl BoardError {
    /// Returns `true` for errors caused by a rejected move request. The front
    /// end ignores these; the board is left untouched.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            BoardError::BitBoardError(_)
                | BoardError::CellOccupied
                | BoardError::GameOver
                | BoardError::OutOfTurn
        )
    }
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::CellOccupied => write!(f, "Cell is already occupied"),
            BoardError::GameOver => write!(f, "Game is already over"),
            BoardError::OutOfTurn => write!(f, "It is not this side's turn"),
            BoardError::NoLegalMove => write!(f, "No legal move is available"),
            BoardError::InconsistentState => {
                write!(f, "Board state cannot arise from alternating play")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
