//! Commonly used types and utilities for ease of import.

pub use crate::{
    select_move, AiPlayer, Board, BoardError, Cell, GameEngine, GamePhase, GameResult, Line,
    Mark, Move, Player, RandomPlayer,
};

#[cfg(feature = "std")]
pub use crate::player_cli::{parse_command, print_board, render_board, Command};
