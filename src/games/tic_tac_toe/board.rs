//! The 3x3 board. Cells are numbered 1-9, left to right, top to bottom.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::side::Side;

/// Cell ids on the board.
pub type CellId = usize;

/// Empty cells, in ascending order.
pub type EmptyCells = SmallVec<[CellId; 9]>;

/// Number of cells.
pub const CELL_COUNT: usize = 9;

/// Who owns a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Player,
    Computer,
}

impl Mark {
    /// Character drawn on the board.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Computer => 'O',
        }
    }
}

impl Side for Mark {
    const ALL: [Self; 2] = [Mark::Player, Mark::Computer];

    fn is_human(self) -> bool {
        self == Mark::Player
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Player => write!(f, "Player"),
            Mark::Computer => write!(f, "Computer"),
        }
    }
}

/// Board cells, each empty or holding one marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from the cells each side holds.
    ///
    /// ```
    /// use parlor_games::games::tic_tac_toe::{Board, Mark};
    ///
    /// let board = Board::from_marks(&[1, 2], &[5]);
    /// assert_eq!(board.get(1), Some(Mark::Player));
    /// assert_eq!(board.get(5), Some(Mark::Computer));
    /// assert_eq!(board.fill_count(), 3);
    /// ```
    pub fn from_marks(player: &[CellId], computer: &[CellId]) -> Self {
        let mut board = Self::new();
        for &cell in player {
            assert!(board.place(cell, Mark::Player), "Cell {} is not free", cell);
        }
        for &cell in computer {
            assert!(board.place(cell, Mark::Computer), "Cell {} is not free", cell);
        }
        board
    }

    /// Is `cell` a real cell id?
    #[must_use]
    pub fn in_range(cell: CellId) -> bool {
        (1..=CELL_COUNT).contains(&cell)
    }

    /// Marker in `cell`. `None` for empty or out-of-range cells.
    #[must_use]
    pub fn get(&self, cell: CellId) -> Option<Mark> {
        if Self::in_range(cell) {
            self.cells[cell - 1]
        } else {
            None
        }
    }

    /// Can a marker go in `cell`?
    #[must_use]
    pub fn is_free(&self, cell: CellId) -> bool {
        Self::in_range(cell) && self.cells[cell - 1].is_none()
    }

    /// Put `mark` in `cell`.
    ///
    /// Returns `false`, leaving the board unchanged, if the cell is taken or
    /// does not exist.
    pub fn place(&mut self, cell: CellId, mark: Mark) -> bool {
        if !self.is_free(cell) {
            return false;
        }
        self.cells[cell - 1] = Some(mark);
        true
    }

    /// Empty cell ids in ascending order.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        (1..=CELL_COUNT).filter(|&cell| self.is_free(cell)).collect()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.fill_count() == CELL_COUNT
    }

    fn symbol(&self, cell: CellId) -> char {
        self.get(cell).map_or(' ', Mark::symbol)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, first) in [1, 4, 7].into_iter().enumerate() {
            if row > 0 {
                writeln!(f, "-----+-----+-----")?;
            }
            writeln!(f, "     |     |     ")?;
            writeln!(
                f,
                "  {}  |  {}  |  {}  ",
                self.symbol(first),
                self.symbol(first + 1),
                self.symbol(first + 2)
            )?;
            if row < 2 {
                writeln!(f, "     |     |     ")?;
            } else {
                write!(f, "     |     |     ")?;
            }
        }
        Ok(())
    }
}
