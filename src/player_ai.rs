use crate::{
    ai,
    board::Board,
    common::{BoardError, Mark, Move},
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Computer player driven by the win/block/center/corner heuristic.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        mark: Mark,
    ) -> Result<Move, BoardError> {
        ai::select_move(board, mark, rng)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Player that picks uniformly among the empty cells.
#[derive(Debug, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        _mark: Mark,
    ) -> Result<Move, BoardError> {
        if board.is_over() {
            return Err(BoardError::NoLegalMove);
        }
        ai::random_empty(board, board.empty_cells(), rng).ok_or(BoardError::NoLegalMove)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
