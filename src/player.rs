use crate::{
    board::Board,
    common::{BoardError, Mark, Move},
};
use rand::rngs::SmallRng;

/// Interface implemented by the different move sources.
pub trait Player {
    /// Choose the next move for `mark` on `board`.
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        mark: Mark,
    ) -> Result<Move, BoardError>;

    /// Short name used in logs and simulation output.
    fn name(&self) -> &'static str;
}
