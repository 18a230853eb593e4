//! Capture resolution after a mill is closed
//!
//! The mover removes one opposing piece. Pieces standing in an intact mill
//! are immune, unless every opposing piece is in a mill.

use crate::board::{Board, Cell, Player};

use super::mill::closes_mill;

/// Successor boards after removing one piece of `victim` from `board`.
///
/// Order follows increasing cell index. The result is empty only when
/// `victim` has no pieces at all.
pub fn resolve_captures(board: &Board, victim: Player) -> Vec<Board> {
    let mut successors = Vec::new();
    resolve_captures_into(board, victim, &mut successors);
    successors
}

/// Same as [`resolve_captures`], appending to an existing list
pub(crate) fn resolve_captures_into(board: &Board, victim: Player, out: &mut Vec<Board>) {
    let start = out.len();

    // A vacated cell that would close a mill for the victim means the
    // removed piece was part of that mill.
    for pos in board.positions_of(victim.cell()) {
        let removed = board.with(pos, Cell::Empty);
        if !closes_mill(pos, &removed, victim) {
            out.push(removed);
        }
    }

    if out.len() == start {
        out.extend(
            board
                .positions_of(victim.cell())
                .map(|pos| board.with(pos, Cell::Empty)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_capture_unprotected_pieces() {
        // Black on 7, 13 and 20, none in a mill
        let b = board("WWxxxxxBxxxxxBxxxxxxB");
        let result = resolve_captures(&b, Player::Black);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].to_string(), "WWxxxxxxxxxxxBxxxxxxB");
        assert_eq!(result[1].to_string(), "WWxxxxxBxxxxxxxxxxxxB");
        assert_eq!(result[2].to_string(), "WWxxxxxBxxxxxBxxxxxxx");
        for r in &result {
            assert_eq!(r.count(Player::White), 2);
        }
    }

    #[test]
    fn test_capture_skips_pieces_in_mill() {
        // Black mill a0-a3-a6 plus a loose piece on d4
        let b = board("BxxxxxBxxxxxxBxxxxBxx");
        let result = resolve_captures(&b, Player::Black);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].to_string(), "BxxxxxBxxxxxxxxxxxBxx");
    }

    #[test]
    fn test_capture_all_in_mills_falls_back() {
        // Only the a0-a3-a6 mill: immunity is waived
        let b = board("BxxxxxBxxxxxxxxxxxBxx");
        let result = resolve_captures(&b, Player::Black);
        assert_eq!(result.len(), 3);
        for r in &result {
            assert_eq!(r.count(Player::Black), 2);
        }
    }

    #[test]
    fn test_capture_is_color_agnostic() {
        let b = board("BxxxxxBxxxxxxBxxxxBxx").invert();
        let result = resolve_captures(&b, Player::White);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].to_string(), "WxxxxxWxxxxxxxxxxxWxx");
    }

    #[test]
    fn test_capture_no_victim_pieces() {
        let b = board("WWWxxxxxxxxxxxxxxxxxx");
        assert!(resolve_captures(&b, Player::Black).is_empty());
    }

    #[test]
    fn test_capture_into_appends() {
        let b = board("WWxxxxxBxxxxxBxxxxxxB");
        let mut out = vec![Board::new()];
        resolve_captures_into(&b, Player::Black, &mut out);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], Board::new());
    }
}
