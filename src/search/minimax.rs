//! Plain minimax

use crate::board::{Board, Player};
use crate::eval::Score;

use super::{Line, Searcher};

impl Searcher {
    /// Full-width minimax over `depth` plies.
    ///
    /// A node whose mover has no successor scores as a loss for that mover.
    pub(super) fn minimax(
        &mut self,
        board: &Board,
        player: Player,
        depth: u32,
        maximizing: bool,
    ) -> Line {
        if depth == 0 {
            return self.leaf(board);
        }

        let mut best: Option<Board> = None;
        let mut best_score = if maximizing {
            -Score::INFINITY
        } else {
            Score::INFINITY
        };

        for child in self.phase.generate_moves(board, player) {
            let (_, score) = self.minimax(&child, player.opponent(), depth - 1, !maximizing);

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if best.is_none() || improves {
                best = Some(child);
                best_score = score;
            }
        }

        (best, best_score)
    }
}
