//! Grid coordinates.

use core::fmt;

/// A cell address on the board: `row` and `col`, both 0-indexed.
///
/// Coordinates are signed so that neighbours of edge cells and raw user input
/// can be represented before they are checked against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position shifted by the given row and column deltas, or `None` if a
    /// coordinate overflows.
    pub fn offset(self, drow: i32, dcol: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(drow)?,
            col: self.col.checked_add(dcol)?,
        })
    }

    /// The position itself and its eight surrounding cells, in row-major order.
    /// Cells outside any board are included; callers filter by bounds.
    pub fn surrounding(self) -> impl Iterator<Item = Position> {
        (-1..=1).flat_map(move |dr| (-1..=1).filter_map(move |dc| self.offset(dr, dc)))
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    /// Prints the 1-based form players type in.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}
