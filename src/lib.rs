//! Morris-B game-tree search engine
//!
//! Finds the best move in the 21-point Morris-B variant of Nine Men's Morris:
//! - Bit-packed board, 2 bits per intersection
//! - 16 mill lines; closing a mill removes an opposing piece
//! - Placement (opening), sliding (midgame) and flying (three pieces left)
//! - Minimax and alpha-beta search with static estimates
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and text encoding
//! - [`rules`]: Geometry, mills, captures and move generation
//! - [`eval`]: Static estimates for the opening and the midgame
//! - [`search`]: Minimax and alpha-beta
//! - [`engine`]: Configuration and the best-move entry point
//! - [`board_file`]: Board file input and output
//!
//! # Quick Start
//!
//! ```
//! use morris::{Board, Engine, EngineConfig, Phase, Player};
//!
//! let board: Board = "xxxxxxxxxWxWxxxxBxxxW".parse().unwrap();
//! let engine = Engine::new(EngineConfig::default().with_depth(1).with_phase(Phase::Opening));
//!
//! // White closes g0-g3-g6 and removes the black piece
//! let result = engine.best_move(&board, Player::White).unwrap();
//! assert_eq!(result.board.to_string(), "xWxxxxxxxWxWxxxxxxxxW");
//! assert_eq!(result.score, 4);
//! ```

pub mod board;
pub mod board_file;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, ParseError, Player, Pos, NUM_CELLS};
pub use board_file::{read_board, write_board, BoardFileError};
pub use engine::{Engine, EngineConfig, MoveResult};
pub use rules::Phase;
pub use search::{Algorithm, SearchError, SearchResult, Searcher};
