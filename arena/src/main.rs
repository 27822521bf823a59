//! Arena - Othello match runner for the Reversi UCT engine
//!
//! Seats two players (UCT search, uniform random, or a human at the
//! terminal), plays one or more games from the standard opening and reports
//! wins, margins, game lengths and MCTS decision time.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

mod arena;
mod config;
mod game;
mod human;
mod mcts_player;
mod player;
mod stats;

use crate::arena::Arena;
use crate::config::Config;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    // Parse configuration
    let config = Config::parse().with_central_fallbacks();

    // Validate configuration
    config.validate()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    info!(
        black = %config.black,
        white = %config.white,
        games = config.games,
        seed = ?config.seed,
        iterations = config.iterations,
        "Starting arena"
    );

    let mut arena = Arena::new(config)?;

    match arena.run() {
        Ok(snapshot) => {
            println!("{}", snapshot);
            info!("Arena completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Arena failed: {}", e);
            Err(e)
        }
    }
}
