//! Match runner seating two players and playing a series of games

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use tracing::info;

use crate::config::Config;
use crate::game::{describe, play_game};
use crate::human::HumanPlayer;
use crate::mcts_player::MctsPlayer;
use crate::player::{Player, PlayerKind, RandomPlayer};
use crate::stats::{MatchStats, MatchStatsSnapshot};

/// Build a player of the given kind.
///
/// Seeded players derive their stream from `seed` so that Black and White
/// never share one.
pub fn create_player(kind: PlayerKind, config: &Config, seed: Option<u64>) -> Box<dyn Player> {
    match kind {
        PlayerKind::Mcts => Box::new(match seed {
            Some(s) => MctsPlayer::with_seed(config.uct_config(), s),
            None => MctsPlayer::new(config.uct_config()),
        }),
        PlayerKind::Random => Box::new(match seed {
            Some(s) => RandomPlayer::with_seed(s),
            None => RandomPlayer::new(),
        }),
        PlayerKind::Human => Box::new(HumanPlayer::new(io::stdin().lock(), io::stdout())),
    }
}

/// A configured match between two players.
pub struct Arena {
    config: Config,
    black: Box<dyn Player>,
    white: Box<dyn Player>,
    stats: MatchStats,
}

impl Arena {
    pub fn new(config: Config) -> Result<Self> {
        let black_kind = config.black_kind()?;
        let white_kind = config.white_kind()?;
        let black = create_player(black_kind, &config, config.seed);
        let white = create_player(white_kind, &config, config.seed.map(|s| s.wrapping_add(1)));

        Ok(Self::with_players(config, black, white))
    }

    /// Seat explicit players (used by tests and embedders).
    pub fn with_players(config: Config, black: Box<dyn Player>, white: Box<dyn Player>) -> Self {
        let stats = MatchStats::new(black.kind(), white.kind());
        Self {
            config,
            black,
            white,
            stats,
        }
    }

    /// Play the configured number of games.
    ///
    /// Stops early when a player quits. Writes the stats file afterwards if
    /// a path is configured.
    pub fn run(&mut self) -> Result<MatchStatsSnapshot> {
        let visible = self.config.board_visible();

        // Progress bar for multi-game runs (only when stderr is a TTY)
        let progress = if self.config.games > 1
            && !visible
            && io::IsTerminal::is_terminal(&io::stderr())
        {
            let pb = ProgressBar::new(self.config.games as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} games ({eta})")?
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        for game in 1..=self.config.games {
            let mut stdout = io::stdout();
            let board_out: Option<&mut dyn Write> = if visible {
                Some(&mut stdout)
            } else {
                None
            };

            let record = play_game(self.black.as_mut(), self.white.as_mut(), board_out)?;
            self.stats.record_game(&record);

            let summary = describe(&record);
            match &progress {
                Some(pb) => {
                    pb.suspend(|| info!(game, passes = record.passes, "Game {}: {}", game, summary));
                    pb.inc(1);
                }
                None => info!(game, passes = record.passes, "Game {}: {}", game, summary),
            }
            if visible {
                println!("Game {}: {}", game, summary);
            }

            if record.abandoned {
                info!(game, "Game abandoned, stopping match");
                break;
            }
        }

        if let Some(pb) = progress {
            pb.finish_with_message("done");
        }

        if let Some(path) = &self.config.stats_path {
            self.stats.write_stats(path)?;
            info!("Match stats written to {}", path.display());
        }

        Ok(self.stats.snapshot())
    }
}
