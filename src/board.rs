//! Board state: one bitboard per mark, win detection and move placement.

use crate::common::{BoardError, Cell, GameResult, Mark, Move};
use crate::config::{Grid, BOARD_SIZE, LINES};
use crate::line::Line;
use core::fmt;

/// Serializable board snapshot, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

/// The 3×3 grid. Only ever grows until [`Board::clear`].
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    player: Grid,
    computer: Grid,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            player: Grid::new(),
            computer: Grid::new(),
        }
    }

    /// Occupancy mask of a single mark.
    pub fn marks(&self, mark: Mark) -> Grid {
        match mark {
            Mark::Player => self.player,
            Mark::Computer => self.computer,
        }
    }

    fn marks_mut(&mut self, mark: Mark) -> &mut Grid {
        match mark {
            Mark::Player => &mut self.player,
            Mark::Computer => &mut self.computer,
        }
    }

    /// Occupancy mask of both marks.
    pub fn occupied(&self) -> Grid {
        self.player | self.computer
    }

    /// Contents of the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if self.player.get(row, col)? {
            Ok(Cell::Marked(Mark::Player))
        } else if self.computer.get(row, col)? {
            Ok(Cell::Marked(Mark::Computer))
        } else {
            Ok(Cell::Empty)
        }
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.occupied().count_ones()
    }

    /// Returns `true` when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> {
        (!self.occupied()).iter_set_bits().map(Move::from)
    }

    /// First line, in scan order, held entirely by `mark`.
    pub fn check_win(&self, mark: Mark) -> Option<Line> {
        let marks = self.marks(mark);
        LINES.into_iter().find(|line| marks.contains_all(line.mask()))
    }

    /// Result of the board. A win outranks a full board.
    pub fn game_result(&self) -> GameResult {
        let computer = self.check_win(Mark::Computer);
        let player = self.check_win(Mark::Player);
        debug_assert!(
            computer.is_none() || player.is_none(),
            "both sides hold a winning line"
        );
        match (computer, player) {
            (Some(line), _) => GameResult::ComputerWins(line),
            (None, Some(line)) => GameResult::PlayerWins(line),
            (None, None) if self.is_full() => GameResult::Draw,
            (None, None) => GameResult::InProgress,
        }
    }

    /// Returns `true` once either side has won or the board is full.
    pub fn is_over(&self) -> bool {
        self.game_result().is_over()
    }

    /// Place `mark` at (row, col).
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        if !self.cell(row, col)?.is_empty() {
            return Err(BoardError::CellOccupied);
        }
        if self.is_over() {
            return Err(BoardError::GameOver);
        }
        self.marks_mut(mark).set(row, col)?;
        Ok(())
    }

    /// Would placing `mark` at (row, col) complete a line for it? The board
    /// itself is left untouched; occupied or off-board cells never win.
    pub fn wins_with(&self, row: usize, col: usize, mark: Mark) -> bool {
        let mut probe = *self;
        probe.place(row, col, mark).is_ok() && probe.check_win(mark).is_some()
    }

    /// Remove every mark.
    pub fn clear(&mut self) {
        self.player.clear_all();
        self.computer.clear_all();
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ player: {:?}, computer: {:?} }}",
            self.player, self.computer
        )
    }
}

impl fmt::Display for Board {
    /// Three rows of symbols, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let ch = match self.cell(r, c).map_err(|_| fmt::Error)? {
                    Cell::Empty => '.',
                    Cell::Marked(m) => m.symbol(),
                };
                write!(f, "{}", ch)?;
            }
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, c) in b.player.iter_set_bits() {
            cells[r][c] = Cell::Marked(Mark::Player);
        }
        for (r, c) in b.computer.iter_set_bits() {
            cells[r][c] = Cell::Marked(Mark::Computer);
        }
        BoardState { cells }
    }
}

impl TryFrom<BoardState> for Board {
    type Error = BoardError;

    /// Rebuild a board, rejecting grids that alternating play cannot reach:
    /// mark counts more than one apart, or a winning line for both sides.
    fn try_from(state: BoardState) -> Result<Self, Self::Error> {
        let mut board = Board::new();
        for (r, row) in state.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Cell::Marked(m) = cell {
                    board.marks_mut(*m).set(r, c)?;
                }
            }
        }
        let players = board.player.count_ones();
        let computers = board.computer.count_ones();
        if players.abs_diff(computers) > 1 {
            return Err(BoardError::InconsistentState);
        }
        if board.check_win(Mark::Player).is_some() && board.check_win(Mark::Computer).is_some() {
            return Err(BoardError::InconsistentState);
        }
        Ok(board)
    }
}
