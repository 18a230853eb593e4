//! Board representation for Morris-B
//!
//! The board has 21 intersections, indexed in this order:
//!
//! ```text
//!  0: a0   1: g0   2: b1   3: f1   4: c2   5: e2   6: a3
//!  7: b3   8: c3   9: e3  10: f3  11: g3  12: c4  13: d4
//! 14: e4  15: b5  16: d5  17: f5  18: a6  19: d6  20: g6
//! ```

pub mod board;
pub mod packed;


// Re-exports
pub use board::{Board, ParseError};
pub use packed::PackedCells;

/// Number of intersections on the board
pub const NUM_CELLS: usize = 21;

/// Contents of a single intersection.
///
/// The discriminants are the 2-bit codes stored in [`PackedCells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    Empty = 0b00,
    White = 0b01,
    Black = 0b10,
    /// Reserved for smaller topologies. Never produced by move generation.
    Unused = 0b11,
}

impl Cell {
    #[inline]
    pub(crate) const fn from_bits(bits: u32) -> Cell {
        match bits & 0b11 {
            0b00 => Cell::Empty,
            0b01 => Cell::White,
            0b10 => Cell::Black,
            _ => Cell::Unused,
        }
    }

    /// Text symbol used by the board file format
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => 'x',
            Cell::White => 'W',
            Cell::Black => 'B',
            Cell::Unused => '-',
        }
    }

    /// Swap White and Black, leave everything else alone
    #[inline]
    pub fn inverted(self) -> Cell {
        match self {
            Cell::White => Cell::Black,
            Cell::Black => Cell::White,
            other => other,
        }
    }
}

/// One of the two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// The cell value a piece of this color occupies
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::White => Cell::White,
            Player::Black => Cell::Black,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}

/// Index of an intersection, always in `0..NUM_CELLS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos(u8);

impl Pos {
    /// Build a position from a table index.
    ///
    /// # Panics
    /// If `index` is not in `0..=20`; use [`Pos::try_new`] for unchecked input.
    #[inline]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < NUM_CELLS, "position out of range");
        Self(index)
    }

    /// Checked constructor, rejects anything outside `0..=20`
    #[inline]
    pub fn try_new(index: usize) -> Option<Self> {
        (index < NUM_CELLS).then_some(Self(index as u8))
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All positions in increasing index order
    pub fn all() -> impl Iterator<Item = Pos> + Clone {
        (0..NUM_CELLS as u8).map(Pos)
    }
}
