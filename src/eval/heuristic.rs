//! Static estimates for leaf boards
//!
//! - Opening: plain material difference
//! - Midgame/endgame: terminal detection, then material weighted against
//!   Black's mobility

use crate::board::{Board, Player};
use crate::rules::{generate_midgame_moves, Phase};

use super::scores::Score;

/// Opening estimate: `white - black`
#[must_use]
pub fn evaluate_opening(board: &Board) -> i32 {
    board.count(Player::White) as i32 - board.count(Player::Black) as i32
}

/// Midgame/endgame estimate.
///
/// Returns [`Score::WHITE_WINS`] when Black is down to two pieces or has no
/// legal move, [`Score::BLACK_WINS`] when White is down to two pieces, and
/// `1000 * (white - black) - black_moves` otherwise. Mobility is counted for
/// Black only.
#[must_use]
pub fn evaluate_midgame(board: &Board) -> i32 {
    let white = board.count(Player::White);
    let black = board.count(Player::Black);

    if black <= Score::LOSING_PIECES {
        return Score::WHITE_WINS;
    }
    if white <= Score::LOSING_PIECES {
        return Score::BLACK_WINS;
    }

    let black_moves = generate_midgame_moves(board, Player::Black).len();
    if black_moves == 0 {
        return Score::WHITE_WINS;
    }

    Score::MATERIAL * (white as i32 - black as i32) - black_moves as i32
}

/// Estimate matching the rules of `phase`
#[inline]
#[must_use]
pub fn evaluate(phase: Phase, board: &Board) -> i32 {
    match phase {
        Phase::Opening => evaluate_opening(board),
        Phase::Midgame => evaluate_midgame(board),
    }
}
