//! Mill detection

use crate::board::{Board, Player, Pos};

use super::geometry::mills_through;

/// Check whether occupying the empty cell `pos` with `player` completes a mill.
///
/// Returns false when `pos` is not empty: only an empty cell can close a mill.
#[inline]
pub fn closes_mill(pos: Pos, board: &Board, player: Player) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    let cell = player.cell();
    mills_through(pos).any(|(a, b)| board.get(a) == cell && board.get(b) == cell)
}
