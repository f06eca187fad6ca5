//! Random fleet generation.

use rand::Rng;

use crate::board::Board;
use crate::config::GameConfig;
use crate::position::Position;
use crate::ship::{Orientation, Ship};

/// Pick a random candidate ship. The bow may land one cell past the last row
/// or column; such candidates are rejected by [`Board::place_ship`].
pub fn random_ship<R: Rng>(rng: &mut R, board_size: usize, length: usize) -> Ship {
    let max = board_size as i32;
    let bow = Position::new(rng.random_range(0..=max), rng.random_range(0..=max));
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(bow, length, orientation)
}

/// Try once to place the whole fleet. Returns `None` once the attempt budget
/// in `config` is spent.
pub fn try_board<R: Rng>(rng: &mut R, config: &GameConfig) -> Option<Board> {
    let mut board = Board::new(config.board_size);
    let mut attempts = 0;
    for &length in &config.fleet {
        loop {
            attempts += 1;
            if attempts > config.max_placement_attempts {
                log::debug!(
                    "gave up on board after {} attempts ({} of {} ships placed)",
                    config.max_placement_attempts,
                    board.ships().len(),
                    config.fleet.len()
                );
                return None;
            }
            let ship = random_ship(rng, config.board_size, length);
            if board.place_ship(ship).is_ok() {
                break;
            }
        }
    }
    log::debug!("fleet placed after {} attempts", attempts);
    board.finish_setup();
    Some(board)
}

/// Generate boards until one holds the complete fleet. The returned board is
/// ready for play.
///
/// Loops forever if `config` admits no valid layout. [`GameConfig::validate`]
/// rules out only fleets that cannot fit by footprint, so it does not prove a
/// layout exists.
pub fn random_board<R: Rng>(rng: &mut R, config: &GameConfig) -> Board {
    let mut restarts = 0usize;
    loop {
        if let Some(board) = try_board(rng, config) {
            if restarts > 0 {
                log::debug!("board generated after {} restarts", restarts);
            }
            return board;
        }
        restarts += 1;
    }
}
