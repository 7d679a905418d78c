use crate::bitboard::BitBoard;
use crate::common::{Mark, Move};
use crate::line::Line;

pub const BOARD_SIZE: usize = 3;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Bitboard type used for per-mark occupancy.
pub type Grid = BitBoard<u16, BOARD_SIZE>;

/// Side that makes the first move of every game.
pub const FIRST_TO_MOVE: Mark = Mark::Player;

pub const CENTER: Move = Move::new(1, 1);
pub const CORNERS: [Move; 4] = [
    Move::new(0, 0),
    Move::new(0, 2),
    Move::new(2, 0),
    Move::new(2, 2),
];

/// Winning lines in scan order: rows, columns, main diagonal, anti-diagonal.
/// When several lines are complete the first one listed is reported.
pub const LINES: [Line; 8] = [
    Line::new([(0, 0), (0, 1), (0, 2)]),
    Line::new([(1, 0), (1, 1), (1, 2)]),
    Line::new([(2, 0), (2, 1), (2, 2)]),
    Line::new([(0, 0), (1, 0), (2, 0)]),
    Line::new([(0, 1), (1, 1), (2, 1)]),
    Line::new([(0, 2), (1, 2), (2, 2)]),
    Line::new([(0, 0), (1, 1), (2, 2)]),
    Line::new([(0, 2), (1, 1), (2, 0)]),
];

/// Pause before the computer answers a human move, in milliseconds.
pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 250;
