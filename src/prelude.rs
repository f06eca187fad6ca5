//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_board, AiPlayer, Board, BoardError, Game, GameConfig, GameError, Orientation, Player,
    Position, Ship, ShotOutcome, Side, TurnState,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_boards, CliPlayer};
