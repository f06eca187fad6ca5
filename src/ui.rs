//! Text rendering of boards.

use core::fmt;

use crate::board::{Board, Cell};
#[cfg(feature = "std")]
use crate::game::{Game, Side};

/// Display adapter for a board. With `hide_ships` set, intact ship cells are
/// drawn as open water.
pub struct BoardView<'a> {
    board: &'a Board,
    hide_ships: bool,
}

impl<'a> BoardView<'a> {
    /// Every cell as it is.
    pub fn revealed(board: &'a Board) -> Self {
        Self {
            board,
            hide_ships: false,
        }
    }

    /// The view the opponent gets.
    pub fn hidden(board: &'a Board) -> Self {
        Self {
            board,
            hide_ships: true,
        }
    }

    fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => 'O',
            Cell::Ship if self.hide_ships => 'O',
            Cell::Ship => '■',
            Cell::Hit => 'X',
            Cell::Miss => '.',
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for c in 0..self.board.size() {
            write!(f, " {} |", c + 1)?;
        }
        for (r, row) in self.board.rows().enumerate() {
            write!(f, "\n{} |", r + 1)?;
            for &cell in row {
                write!(f, " {} |", self.symbol(cell))?;
            }
        }
        Ok(())
    }
}

/// Print side A's board in full and side B's board hidden.
#[cfg(feature = "std")]
pub fn print_boards(game: &Game<'_>) {
    let rule = "-".repeat(20);
    std::println!("{}", rule);
    std::println!("Player's board:");
    std::println!("{}", BoardView::revealed(game.board(Side::A)));
    std::println!("{}", rule);
    std::println!("Opponent's board:");
    std::println!("{}", BoardView::hidden(game.board(Side::B)));
    std::println!("{}", rule);
}
