//! Common types for the naval battle: board errors and shot outcomes.

/// Result of a shot that landed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot missed all ships.
    Miss,
    /// Shot hit a ship that still has undamaged cells. The shooter fires again.
    Hit,
    /// Shot destroyed the last undamaged cell of a ship.
    Sunk,
}

/// Errors returned by Board operations. None of them leave the board modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Target position is outside the grid.
    OutOfBounds,
    /// Target was already fired upon, holds a ship, or lies in a placement buffer.
    AlreadyTargeted,
    /// Ship would leave the grid or overlap an excluded cell.
    InvalidPlacement,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Shot is outside the board"),
            BoardError::AlreadyTargeted => write!(f, "You have already fired at this cell"),
            BoardError::InvalidPlacement => write!(f, "Ship cannot be placed there"),
        }
    }
}

impl core::error::Error for BoardError {}
