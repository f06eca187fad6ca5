//! Ship geometry and damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::position::Position;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells extend to increasing columns from the bow.
    Horizontal,
    /// Cells extend to increasing rows from the bow.
    Vertical,
}

/// A straight ship anchored at its bow.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    bow: Position,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Ship {
    /// Create an undamaged ship. Placement validity is checked by the board.
    pub fn new(bow: Position, length: usize, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    /// Anchor cell of the ship.
    pub fn bow(&self) -> Position {
        self.bow
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Undamaged cells left.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    /// Cells covered by the ship, starting at the bow. Stops early if a
    /// coordinate would overflow, so it can yield fewer than `length` cells.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let bow = self.bow;
        let orientation = self.orientation;
        let len = i32::try_from(self.length).unwrap_or(i32::MAX);
        (0..len).map_while(move |i| match orientation {
            Orientation::Horizontal => bow.offset(0, i),
            Orientation::Vertical => bow.offset(i, 0),
        })
    }

    /// Collected form of [`Ship::cells`].
    pub fn occupied_cells(&self) -> Vec<Position> {
        self.cells().collect()
    }

    /// Returns `true` if `pos` is one of the ship's cells.
    pub fn is_hit_by(&self, pos: Position) -> bool {
        self.cells().any(|c| c == pos)
    }

    /// Record one hit. Returns `true` only on the hit that sinks the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        match self.remaining_hits {
            0 => false,
            n => {
                self.remaining_hits = n - 1;
                self.remaining_hits == 0
            }
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, remaining: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.remaining_hits,
        )
    }
}
