//! Search module for Morris-B
//!
//! Contains:
//! - Plain depth-bounded minimax
//! - Minimax with alpha-beta pruning
//!
//! Both searches walk successors in generator order, keep the first of
//! equally scored moves, and count leaf evaluations. Alpha-beta returns the
//! same board and score as minimax; only the node count differs.

pub mod alphabeta;
pub mod minimax;

use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use crate::board::{Board, Player};
use crate::eval::{evaluate, Score};
use crate::rules::Phase;

/// Which tree search to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

/// Search failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{player:?} has no legal move")]
    NoLegalMoves { player: Player },
}

/// Search result containing the chosen board and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Board after the chosen move (the input board for a depth-0 search)
    pub board: Board,
    /// Minimax value, from White's point of view
    pub score: i32,
    /// Boards scored by the static estimate
    pub nodes: u64,
    /// Sibling lists cut short by alpha-beta (always 0 for minimax)
    pub cutoffs: u64,
}

/// Best child found at an interior node, `None` for leaves and dead ends
type Line = (Option<Board>, i32);

/// Depth-bounded game-tree searcher.
///
/// # Example
///
/// ```
/// use morris::board::{Board, Player};
/// use morris::rules::Phase;
/// use morris::search::{Algorithm, Searcher};
///
/// let board: Board = "xxxxxxxxxWxWxxxxBxxxW".parse().unwrap();
/// let mut searcher = Searcher::new(Phase::Opening, Algorithm::AlphaBeta);
/// let result = searcher.search(&board, Player::White, 2).unwrap();
/// assert_eq!(result.board.count(Player::White), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Searcher {
    phase: Phase,
    algorithm: Algorithm,
    nodes: u64,
    cutoffs: u64,
}

impl Searcher {
    pub fn new(phase: Phase, algorithm: Algorithm) -> Self {
        Self {
            phase,
            algorithm,
            nodes: 0,
            cutoffs: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Search `depth` plies ahead with `player` to move.
    ///
    /// White maximizes and Black minimizes; scores are always from White's
    /// point of view. A depth of 0 scores the input board itself.
    ///
    /// # Errors
    /// [`SearchError::NoLegalMoves`] when `depth > 0` and `player` cannot
    /// move at all.
    pub fn search(
        &mut self,
        board: &Board,
        player: Player,
        depth: u32,
    ) -> Result<SearchResult, SearchError> {
        self.nodes = 0;
        self.cutoffs = 0;
        let start = Instant::now();
        let maximizing = player == Player::White;

        let (best, score) = match self.algorithm {
            Algorithm::Minimax => self.minimax(board, player, depth, maximizing),
            Algorithm::AlphaBeta => self.alpha_beta(
                board,
                player,
                depth,
                -Score::INFINITY,
                Score::INFINITY,
                maximizing,
            ),
        };

        debug!(
            phase = ?self.phase,
            algorithm = ?self.algorithm,
            ?player,
            depth,
            nodes = self.nodes,
            cutoffs = self.cutoffs,
            score,
            elapsed_us = start.elapsed().as_micros() as u64,
            "search finished"
        );

        let board = match (depth, best) {
            (0, _) => *board,
            (_, Some(best)) => best,
            (_, None) => return Err(SearchError::NoLegalMoves { player }),
        };

        Ok(SearchResult {
            board,
            score,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        })
    }

    /// Score a leaf and count it
    #[inline]
    fn leaf(&mut self, board: &Board) -> Line {
        self.nodes += 1;
        (None, evaluate(self.phase, board))
    }
}

#[cfg(test)]
mod tests;
