#![cfg_attr(not(feature = "std"), no_std)]

pub mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod line;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
pub mod player_cli;
pub mod prelude;

pub use ai::{find_winning_move, select_move, select_move_with_rule, Rule};
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use line::Line;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
