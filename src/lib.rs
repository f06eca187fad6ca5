#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
pub mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
mod position;
pub mod prelude;
mod ship;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::{random_board, try_board};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, DEFAULT_LOG_LEVEL};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use position::*;
pub use ship::*;
pub use ui::BoardView;
#[cfg(feature = "std")]
pub use ui::print_boards;
