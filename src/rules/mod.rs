//! Game rules for Morris-B
//!
//! This module implements the rule set:
//! - Board geometry (mill lines, adjacency)
//! - Mill detection
//! - Capture with mill immunity
//! - Move generation for placement, sliding and flying

pub mod capture;
pub mod geometry;
pub mod mill;
pub mod movegen;

use crate::board::{Board, Player};

// Re-exports for convenient access
pub use capture::resolve_captures;
pub use geometry::{mills_through, neighbors, MILLS, NUM_MILLS};
pub use mill::closes_mill;
pub use movegen::{
    generate_flights, generate_midgame_moves, generate_placements, generate_slides,
    FLYING_PIECES,
};

/// Game phase. Not stored on the board; the caller decides which rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Pieces are still being placed
    #[default]
    Opening,
    /// Pieces slide, or fly once a side is down to three
    Midgame,
}

impl Phase {
    /// Successor boards for `player` under this phase's movement rules
    pub fn generate_moves(self, board: &Board, player: Player) -> Vec<Board> {
        match self {
            Phase::Opening => generate_placements(board, player),
            Phase::Midgame => generate_midgame_moves(board, player),
        }
    }
}
