//! Fixed Morris-B geometry: mill lines and adjacency
//!
//! Both tables are process-wide constants derived from the board drawing.
//! Mill lines are stored as undirected triples; the mill detector checks
//! each line from whichever member it is asked about.

use crate::board::{Pos, NUM_CELLS};

/// Number of mill lines on the board
pub const NUM_MILLS: usize = 16;

const fn p(index: u8) -> Pos {
    Pos::new(index)
}

/// All mill lines
pub static MILLS: [[Pos; 3]; NUM_MILLS] = [
    // Columns
    [p(0), p(6), p(18)],  // a0 a3 a6
    [p(2), p(7), p(15)],  // b1 b3 b5
    [p(4), p(8), p(12)],  // c2 c3 c4
    [p(13), p(16), p(19)], // d4 d5 d6
    [p(5), p(9), p(14)],  // e2 e3 e4
    [p(3), p(10), p(17)], // f1 f3 f5
    [p(1), p(11), p(20)], // g0 g3 g6
    // Rows
    [p(6), p(7), p(8)],    // a3 b3 c3
    [p(9), p(10), p(11)],  // e3 f3 g3
    [p(12), p(13), p(14)], // c4 d4 e4
    [p(15), p(16), p(17)], // b5 d5 f5
    [p(18), p(19), p(20)], // a6 d6 g6
    // Diagonals
    [p(0), p(2), p(4)],    // a0 b1 c2
    [p(1), p(3), p(5)],    // g0 f1 e2
    [p(12), p(15), p(18)], // c4 b5 a6
    [p(14), p(17), p(20)], // e4 f5 g6
];

/// Neighbors of every intersection, indexed by position
static ADJACENCY: [&[Pos]; NUM_CELLS] = [
    &[p(1), p(2), p(6)],         // a0
    &[p(0), p(3), p(11)],        // g0
    &[p(0), p(3), p(4), p(7)],   // b1
    &[p(1), p(2), p(5), p(10)],  // f1
    &[p(2), p(5), p(8)],         // c2
    &[p(3), p(4), p(9)],         // e2
    &[p(0), p(7), p(18)],        // a3
    &[p(2), p(6), p(8), p(15)],  // b3
    &[p(4), p(7), p(12)],        // c3
    &[p(5), p(10), p(14)],       // e3
    &[p(3), p(9), p(11), p(17)], // f3
    &[p(1), p(10), p(20)],       // g3
    &[p(8), p(13), p(15)],       // c4
    &[p(12), p(14), p(16)],      // d4
    &[p(9), p(13), p(17)],       // e4
    &[p(7), p(12), p(16), p(18)], // b5
    &[p(13), p(15), p(17), p(19)], // d5
    &[p(10), p(14), p(16), p(20)], // f5
    &[p(6), p(15), p(19)],       // a6
    &[p(16), p(18), p(20)],      // d6
    &[p(11), p(17), p(19)],      // g6
];

/// Intersections joined to `pos` by a line segment
#[inline]
pub fn neighbors(pos: Pos) -> &'static [Pos] {
    ADJACENCY[pos.index()]
}

/// Mill lines passing through `pos`, each paired with its two other members
pub fn mills_through(pos: Pos) -> impl Iterator<Item = (Pos, Pos)> {
    MILLS.iter().filter_map(move |&[a, b, c]| {
        if a == pos {
            Some((b, c))
        } else if b == pos {
            Some((a, c))
        } else if c == pos {
            Some((a, b))
        } else {
            None
        }
    })
}
