//! Successor generation for the three movement regimes
//!
//! Every generator returns boards in a deterministic order (increasing
//! origin index, then destination) so that searches are reproducible.
//! When a move closes a mill the raw move is replaced by its capture
//! branches.

use crate::board::{Board, Cell, Player, Pos};

use super::capture::resolve_captures_into;
use super::geometry::neighbors;
use super::mill::closes_mill;

/// Piece count at which a side may fly
pub const FLYING_PIECES: usize = 3;

/// Put `player` on the empty cell `to` and push the result (or its captures).
///
/// The mill test runs before the piece lands, on a board where any
/// origin cell has already been vacated.
#[inline]
fn land(board: &Board, to: Pos, player: Player, out: &mut Vec<Board>) {
    let closes = closes_mill(to, board, player);
    let next = board.with(to, player.cell());
    if closes {
        resolve_captures_into(&next, player.opponent(), out);
    } else {
        out.push(next);
    }
}

/// Opening: place a new piece on any empty cell
pub fn generate_placements(board: &Board, player: Player) -> Vec<Board> {
    let mut moves = Vec::new();
    for to in board.positions_of(Cell::Empty) {
        land(board, to, player, &mut moves);
    }
    moves
}

/// Midgame: slide a piece to an adjacent empty cell
pub fn generate_slides(board: &Board, player: Player) -> Vec<Board> {
    let mut moves = Vec::new();
    for from in board.positions_of(player.cell()) {
        let lifted = board.with(from, Cell::Empty);
        for &to in neighbors(from) {
            if board.is_empty(to) {
                land(&lifted, to, player, &mut moves);
            }
        }
    }
    moves
}

/// Endgame: with exactly three pieces, jump to any empty cell
pub fn generate_flights(board: &Board, player: Player) -> Vec<Board> {
    let mut moves = Vec::new();
    for from in board.positions_of(player.cell()) {
        let lifted = board.with(from, Cell::Empty);
        for to in board.positions_of(Cell::Empty) {
            land(&lifted, to, player, &mut moves);
        }
    }
    moves
}

/// Midgame/endgame moves: flights when the mover is down to three pieces,
/// slides otherwise
pub fn generate_midgame_moves(board: &Board, player: Player) -> Vec<Board> {
    if board.count(player) == FLYING_PIECES {
        generate_flights(board, player)
    } else {
        generate_slides(board, player)
    }
}
