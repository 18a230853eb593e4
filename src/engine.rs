//! Main engine: configuration plus a single best-move search
//!
//! # Example
//!
//! ```
//! use morris::{Engine, EngineConfig, Player};
//!
//! let engine = Engine::new(EngineConfig::default().with_depth(2));
//! let board = "xxxxxxxxxWxWxxxxBxxxW".parse().unwrap();
//!
//! let result = engine.best_move(&board, Player::White).unwrap();
//! println!("Best board: {}", result.board);
//! println!("Score: {}", result.score);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::info;

use crate::board::{Board, Player};
use crate::rules::Phase;
use crate::search::{Algorithm, SearchError, Searcher};

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 3;

/// Search settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies to search
    pub depth: u32,
    /// Movement and evaluation rules
    pub phase: Phase,
    /// Minimax or alpha-beta
    pub algorithm: Algorithm,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            phase: Phase::Opening,
            algorithm: Algorithm::AlphaBeta,
        }
    }
}

impl EngineConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Result of a move search with timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Board after the chosen move
    pub board: Board,
    /// Minimax estimate, White's point of view
    pub score: i32,
    /// Positions evaluated by the static estimate
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Best-move engine for Morris-B.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Set maximum search depth
    pub fn set_depth(&mut self, depth: u32) {
        self.config.depth = depth;
    }

    /// Find the best move for `player`.
    ///
    /// # Errors
    /// [`SearchError::NoLegalMoves`] when `player` cannot move and the
    /// configured depth is non-zero.
    pub fn best_move(&self, board: &Board, player: Player) -> Result<MoveResult, SearchError> {
        let start = Instant::now();
        let mut searcher = Searcher::new(self.config.phase, self.config.algorithm);
        let result = searcher.search(board, player, self.config.depth)?;
        let time_ms = start.elapsed().as_millis() as u64;

        info!(
            input = %board,
            output = %result.board,
            ?player,
            depth = self.config.depth,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "best move found"
        );

        Ok(MoveResult {
            board: result.board,
            score: result.score,
            nodes: result.nodes,
            time_ms,
        })
    }
}
