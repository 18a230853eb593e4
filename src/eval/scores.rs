//! Score constants for static evaluation
//!
//! All scores are from White's point of view: positive favors White.

/// Score constants
pub struct Score;

impl Score {
    /// Decided game in White's favor
    pub const WHITE_WINS: i32 = 10_000;
    /// Decided game in Black's favor
    pub const BLACK_WINS: i32 = -10_000;
    /// Value of one piece of material in the midgame
    pub const MATERIAL: i32 = 1_000;
    /// A side with this many pieces or fewer has lost
    pub const LOSING_PIECES: usize = 2;

    /// Search bound, outside any static estimate. Never negate `i32::MIN`.
    pub const INFINITY: i32 = i32::MAX;
}
