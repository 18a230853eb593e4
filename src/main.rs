//! Morris-B best-move CLI
//!
//! Reads a board from INPUT, searches DEPTH plies for the side to move,
//! writes the resulting board to OUTPUT and reports the search on stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;

use morris::{read_board, write_board, Algorithm, Engine, EngineConfig, Phase, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PhaseArg {
    Opening,
    Midgame,
}

impl From<PhaseArg> for Phase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Opening => Phase::Opening,
            PhaseArg::Midgame => Phase::Midgame,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Minimax,
    AlphaBeta,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Minimax => Algorithm::Minimax,
            AlgorithmArg::AlphaBeta => Algorithm::AlphaBeta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerArg {
    White,
    Black,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::White => Player::White,
            PlayerArg::Black => Player::Black,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "morris", version, about = "Best-move search for Morris-B")]
struct Cli {
    /// File holding the 21-character input board
    input: PathBuf,

    /// File the chosen board is written to
    output: PathBuf,

    /// Plies to search
    depth: u32,

    /// Movement and evaluation rules
    #[arg(long, value_enum, default_value = "opening")]
    phase: PhaseArg,

    /// Search algorithm
    #[arg(long, value_enum, default_value = "minimax")]
    algorithm: AlgorithmArg,

    /// Side to move; White maximizes, Black minimizes
    #[arg(long, value_enum, default_value = "white")]
    player: PlayerArg,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "MORRIS_LOG", default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    debug!(?cli, "arguments parsed");

    let board = read_board(&cli.input)?;
    println!("Input position: {board}");

    let config = EngineConfig::default()
        .with_depth(cli.depth)
        .with_phase(cli.phase.into())
        .with_algorithm(cli.algorithm.into());
    let engine = Engine::new(config);
    let player = Player::from(cli.player);

    let result = engine
        .best_move(&board, player)
        .with_context(|| format!("cannot search from {board}"))?;

    let label = match config.algorithm {
        Algorithm::Minimax => "MINIMAX",
        Algorithm::AlphaBeta => "ALPHA-BETA",
    };
    println!("Output position: {}", result.board);
    println!("Positions evaluated by static estimation: {}", result.nodes);
    println!("{label} estimate: {}", result.score);

    write_board(&cli.output, &result.board)?;
    Ok(())
}
