//! Minimax with alpha-beta pruning
//!
//! Fail-soft bounds: a node always returns the best score it saw, so the
//! root value and the chosen child match plain minimax exactly.

use crate::board::{Board, Player};
use crate::eval::Score;

use super::{Line, Searcher};

impl Searcher {
    /// Recursive alpha-beta search over `depth` plies.
    pub(super) fn alpha_beta(
        &mut self,
        board: &Board,
        player: Player,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
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

        let moves = self.phase.generate_moves(board, player);
        let total = moves.len();

        for (i, child) in moves.into_iter().enumerate() {
            let (_, score) =
                self.alpha_beta(&child, player.opponent(), depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if best.is_none() || score > best_score {
                    best = Some(child);
                    best_score = score;
                }
                alpha = alpha.max(score);
            } else {
                if best.is_none() || score < best_score {
                    best = Some(child);
                    best_score = score;
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                if i + 1 < total {
                    self.cutoffs += 1;
                }
                break;
            }
        }

        (best, best_score)
    }
}
