//! Board state: grid cells, placed ships, and the excluded-cell set.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, ShotOutcome};
use crate::position::Position;
use crate::ship::Ship;

/// Visible state of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Miss,
    Hit,
}

/// Serializable snapshot of a board as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub size: usize,
    /// Row-major cells, `size * size` entries.
    pub cells: Vec<Cell>,
    pub ships: usize,
    pub destroyed: usize,
}

/// One side's board. Mutated only through [`Board::place_ship`] and [`Board::shoot`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Vec<Cell>,
    ships: Vec<Ship>,
    excluded: BTreeSet<Position>,
    destroyed: usize,
    setup_finished: bool,
}

impl Board {
    /// Create an empty `size` x `size` board.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            grid: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            excluded: BTreeSet::new(),
            destroyed: 0,
            setup_finished: false,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Returns `true` when at least one ship is placed and all are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.destroyed == self.ships.len()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Cell state at `pos`, or `None` off the board.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.grid[i])
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.chunks(self.size.max(1))
    }

    /// Returns `true` once [`Board::finish_setup`] has been called.
    pub fn is_setup_finished(&self) -> bool {
        self.setup_finished
    }

    pub fn is_excluded(&self, pos: Position) -> bool {
        self.excluded.contains(&pos)
    }

    /// Cells closed to placement and to shooting, in position order.
    pub fn excluded_cells(&self) -> impl Iterator<Item = &Position> {
        self.excluded.iter()
    }

    /// Place a ship, reserving its cells and the one-cell buffer around it.
    /// On error the board is left untouched.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if ship.length() == 0 || ship.length() > self.size {
            return Err(BoardError::InvalidPlacement);
        }
        let cells = ship.occupied_cells();
        if cells.len() != ship.length()
            || cells
                .iter()
                .any(|&c| !self.in_bounds(c) || self.excluded.contains(&c))
        {
            return Err(BoardError::InvalidPlacement);
        }
        for &c in &cells {
            if let Some(i) = self.index(c) {
                self.grid[i] = Cell::Ship;
            }
            self.excluded.insert(c);
        }
        log::debug!("placed {:?}", ship);
        self.ships.push(ship);
        self.contour(&cells, false);
        Ok(())
    }

    /// End the setup phase. Buffer and ship cells stop being excluded, so only
    /// shots (and the revealed surroundings of sunk ships) block targeting.
    pub fn finish_setup(&mut self) {
        self.excluded.clear();
        self.setup_finished = true;
    }

    /// Fire at `pos`. Errors are returned before any state changes.
    pub fn shoot(&mut self, pos: Position) -> Result<ShotOutcome, BoardError> {
        let idx = self.index(pos).ok_or(BoardError::OutOfBounds)?;
        if self.excluded.contains(&pos) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.excluded.insert(pos);

        let Some(hit) = self.ships.iter().position(|s| s.is_hit_by(pos)) else {
            self.grid[idx] = Cell::Miss;
            log::debug!("shot at {:?}: miss", pos);
            return Ok(ShotOutcome::Miss);
        };

        self.grid[idx] = Cell::Hit;
        if self.ships[hit].register_hit() {
            self.destroyed += 1;
            let cells = self.ships[hit].occupied_cells();
            self.contour(&cells, true);
            log::info!(
                "ship {} sunk ({} of {} destroyed)",
                hit,
                self.destroyed,
                self.ships.len()
            );
            Ok(ShotOutcome::Sunk)
        } else {
            log::debug!("shot at {:?}: hit", pos);
            Ok(ShotOutcome::Hit)
        }
    }

    /// Exclude every in-bounds cell within one step of `cells`. With `reveal`
    /// the newly excluded cells are also drawn as misses.
    fn contour(&mut self, cells: &[Position], reveal: bool) {
        for &c in cells {
            for near in c.surrounding() {
                let Some(i) = self.index(near) else {
                    continue;
                };
                if self.excluded.insert(near) && reveal {
                    self.grid[i] = Cell::Miss;
                }
            }
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  ships: {:?},\n  destroyed: {},\n  excluded: {}\n}}",
            self.size,
            self.ships,
            self.destroyed,
            self.excluded.len()
        )
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            size: b.size,
            cells: b.grid.clone(),
            ships: b.ships.len(),
            destroyed: b.destroyed,
        }
    }
}
