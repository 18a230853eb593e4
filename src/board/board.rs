//! Board value type with text encoding

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::packed::PackedCells;
use super::{Cell, Player, Pos, NUM_CELLS};

/// Rejected board text. Parsing never yields a partially built board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("board must have exactly 21 cells, got {found}")]
    WrongLength { found: usize },

    #[error("invalid cell {found:?} at index {index} (expected 'x', 'W' or 'B')")]
    InvalidChar { index: usize, found: char },
}

/// Immutable Morris-B board.
///
/// `Board` is `Copy`; every "mutation" returns a new value, so search
/// branches never share storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: PackedCells,
}

impl Board {
    /// Empty board
    pub const fn new() -> Self {
        Self {
            cells: PackedCells::new(),
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells.get(pos)
    }

    /// Get cell by raw index, `None` outside `0..=20`
    #[inline]
    pub fn try_get(&self, index: usize) -> Option<Cell> {
        Pos::try_new(index).map(|pos| self.get(pos))
    }

    /// Copy of this board with one cell replaced
    #[inline]
    #[must_use]
    pub fn with(&self, pos: Pos, cell: Cell) -> Board {
        Board {
            cells: self.cells.with(pos, cell),
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Positions holding `cell`, in increasing index order
    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.get(pos) == cell)
    }

    /// Number of pieces of a color on the board
    pub fn count(&self, player: Player) -> usize {
        self.positions_of(player.cell()).count()
    }

    /// Colors swapped on every cell; `invert(invert(b)) == b`
    #[must_use]
    pub fn invert(&self) -> Board {
        Pos::all().fold(*self, |board, pos| board.with(pos, self.get(pos).inverted()))
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let found = text.chars().count();
        if found != NUM_CELLS {
            return Err(ParseError::WrongLength { found });
        }

        let mut board = Board::new();
        for (pos, ch) in Pos::all().zip(text.chars()) {
            let cell = match ch {
                'x' => Cell::Empty,
                'W' => Cell::White,
                'B' => Cell::Black,
                // '-' is emitted for Unused but deliberately not accepted
                _ => {
                    return Err(ParseError::InvalidChar {
                        index: pos.index(),
                        found: ch,
                    })
                }
            };
            board = board.with(pos, cell);
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Pos::all() {
            write!(f, "{}", self.get(pos).symbol())?;
        }
        Ok(())
    }
}
