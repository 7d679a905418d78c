// Heuristic move selection for the computer opponent.
// One ply of look-ahead, no search; uses no_std and avoids heap allocations.

use crate::{
    board::Board,
    common::{BoardError, Mark, Move},
    config::{CENTER, CORNERS, NUM_CELLS},
};
use rand::Rng;

/// Which rule of the heuristic produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Win,
    Block,
    Center,
    Corner,
    Fallback,
}

/// First empty cell, in row-major order, where `mark` would complete a line.
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<Move> {
    board
        .empty_cells()
        .find(|mv| board.wins_with(mv.row, mv.col, mark))
}

/// Choose the next move for `mark`, applying the rules in strict priority:
/// win now, block the opponent, take the center, take a random empty corner,
/// take any random empty cell.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    mark: Mark,
    rng: &mut R,
) -> Result<Move, BoardError> {
    select_move_with_rule(board, mark, rng).map(|(mv, _)| mv)
}

/// Like [`select_move`], also reporting the rule that fired.
pub fn select_move_with_rule<R: Rng + ?Sized>(
    board: &Board,
    mark: Mark,
    rng: &mut R,
) -> Result<(Move, Rule), BoardError> {
    if board.is_over() {
        return Err(BoardError::NoLegalMove);
    }

    let chosen = if let Some(mv) = find_winning_move(board, mark) {
        (mv, Rule::Win)
    } else if let Some(mv) = find_winning_move(board, mark.opponent()) {
        (mv, Rule::Block)
    } else if board.cell(CENTER.row, CENTER.col)?.is_empty() {
        (CENTER, Rule::Center)
    } else if let Some(mv) = random_empty(board, CORNERS, rng) {
        (mv, Rule::Corner)
    } else if let Some(mv) = random_empty(board, board.empty_cells(), rng) {
        (mv, Rule::Fallback)
    } else {
        return Err(BoardError::NoLegalMove);
    };

    log::debug!("{:?} selects {} via {:?}", mark, chosen.0, chosen.1);
    Ok(chosen)
}

/// Pick uniformly among the `candidates` that are empty on `board`.
pub fn random_empty<R, I>(board: &Board, candidates: I, rng: &mut R) -> Option<Move>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = Move>,
{
    let mut buf = [Move::new(0, 0); NUM_CELLS];
    let mut n = 0;
    for mv in candidates {
        if n < NUM_CELLS && matches!(board.cell(mv.row, mv.col), Ok(c) if c.is_empty()) {
            buf[n] = mv;
            n += 1;
        }
    }
    if n == 0 {
        return None;
    }
    Some(buf[rng.random_range(0..n)])
}
