//! Two-word packed storage, 2 bits per intersection

use super::{Cell, Pos};

/// Cells 0..16 live in the low word, cells 16..21 in the high word.
const LOW_CELLS: usize = 16;

/// Bit-packed cell storage.
///
/// `Empty` is all-zero bits, so `PackedCells::default()` is an empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedCells {
    low: u32,
    high: u32,
}

impl PackedCells {
    /// Create storage with every cell empty
    pub const fn new() -> Self {
        Self { low: 0, high: 0 }
    }

    /// Read the cell at `pos`
    #[inline]
    pub const fn get(self, pos: Pos) -> Cell {
        let (word, shift) = self.locate(pos);
        Cell::from_bits(word >> shift)
    }

    /// Return a copy with the cell at `pos` replaced
    #[inline]
    pub const fn with(self, pos: Pos, cell: Cell) -> Self {
        let idx = pos.index();
        if idx < LOW_CELLS {
            Self {
                low: update_word(self.low, idx, cell),
                high: self.high,
            }
        } else {
            Self {
                low: self.low,
                high: update_word(self.high, idx - LOW_CELLS, cell),
            }
        }
    }

    #[inline]
    const fn locate(self, pos: Pos) -> (u32, u32) {
        let idx = pos.index();
        if idx < LOW_CELLS {
            (self.low, (idx * 2) as u32)
        } else {
            (self.high, ((idx - LOW_CELLS) * 2) as u32)
        }
    }
}

#[inline]
const fn update_word(word: u32, slot: usize, cell: Cell) -> u32 {
    let shift = slot * 2;
    let mask = 0b11u32 << shift;
    (word & !mask) | ((cell as u32) << shift)
}
