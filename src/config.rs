use alloc::vec::Vec;
use core::fmt;

use crate::game::Side;

pub const BOARD_SIZE: usize = 6;
pub const FLEET_SIZE: usize = 7;
/// Ship lengths every side places, in placement order.
pub const FLEET: [usize; FLEET_SIZE] = [4, 3, 2, 2, 1, 1, 1];
/// Placement attempts allowed for one whole board before generation starts over.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub fleet: Vec<usize>,
    pub max_placement_attempts: usize,
    pub first: Side,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            first: Side::A,
        }
    }
}

impl GameConfig {
    /// Standard fleet on a board of the given size.
    pub fn with_board_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Number of ships that must be sunk to win.
    pub fn fleet_size(&self) -> usize {
        self.fleet.len()
    }

    /// Reject settings that are plainly unplayable: bad sizes, an empty fleet,
    /// or a fleet whose buffered footprint exceeds the board.
    ///
    /// The footprint check is only a necessary condition. A fleet that passes
    /// can still admit no layout (twelve single-cell ships on 6x6 fit by area
    /// but at most nine can be kept apart), and [`random_board`] then never
    /// returns. Use [`try_board`] when the fleet is not known to fit.
    ///
    /// [`random_board`]: crate::fleet::random_board
    /// [`try_board`]: crate::fleet::try_board
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > i32::MAX as usize {
            return Err(ConfigError::InvalidBoardSize(self.board_size));
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if let Some(&len) = self
            .fleet
            .iter()
            .find(|&&len| len == 0 || len > self.board_size)
        {
            return Err(ConfigError::InvalidShipLength(len));
        }
        // Each ship plus the buffer on its low side covers a disjoint
        // (len + 1) x 2 block of the grid grown by one row and column.
        let footprint: usize = self.fleet.iter().map(|len| (len + 1) * 2).sum();
        if footprint > (self.board_size + 1) * (self.board_size + 1) {
            return Err(ConfigError::FleetTooLarge);
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }
        Ok(())
    }
}

/// Errors returned by [`GameConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBoardSize(usize),
    EmptyFleet,
    InvalidShipLength(usize),
    FleetTooLarge,
    NoPlacementAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBoardSize(size) => write!(f, "Invalid board size {}", size),
            ConfigError::EmptyFleet => write!(f, "Fleet has no ships"),
            ConfigError::InvalidShipLength(len) => {
                write!(f, "Ship length {} does not fit on the board", len)
            }
            ConfigError::FleetTooLarge => write!(f, "Fleet does not fit on the board"),
            ConfigError::NoPlacementAttempts => {
                write!(f, "Placement attempt limit must be positive")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
