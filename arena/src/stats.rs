//! Match statistics tracking and persistence.
//!
//! Tracks outcomes, margins, game lengths and MCTS decision time across a
//! match. A snapshot can be written to a JSON file.

use anyhow::{Context, Result};
use engine_core::Side;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

use crate::game::GameRecord;
use crate::player::PlayerKind;

/// Aggregated statistics for one arena run.
#[derive(Debug)]
pub struct MatchStats {
    black: PlayerKind,
    white: PlayerKind,
    /// Games that ran to the end
    games_completed: u32,
    /// Games a player quit
    games_abandoned: u32,
    black_wins: u32,
    white_wins: u32,
    draws: u32,
    /// Sum of winning margins over completed games (draws add 0)
    total_margin: u64,
    /// Sum of plies over completed games
    total_plies: u64,
    /// Number of decisions made by MCTS players
    mcts_decisions: u64,
    /// Total MCTS decision time (microseconds)
    mcts_time_us: u64,
    /// Start time for runtime reporting
    start_time: Instant,
}

/// Serializable stats for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchStatsSnapshot {
    pub black_player: String,
    pub white_player: String,
    pub games_completed: u32,
    pub games_abandoned: u32,
    pub black_wins: u32,
    pub white_wins: u32,
    pub draws: u32,
    pub avg_margin: f64,
    pub avg_plies: f64,
    pub mcts_decisions: u64,
    pub mcts_avg_decision_ms: f64,
    pub runtime_seconds: f64,
    pub timestamp: u64,
}

impl MatchStats {
    /// Create new stats tracker.
    pub fn new(black: PlayerKind, white: PlayerKind) -> Self {
        Self {
            black,
            white,
            games_completed: 0,
            games_abandoned: 0,
            black_wins: 0,
            white_wins: 0,
            draws: 0,
            total_margin: 0,
            total_plies: 0,
            mcts_decisions: 0,
            mcts_time_us: 0,
            start_time: Instant::now(),
        }
    }

    /// Record a finished or abandoned game.
    ///
    /// Abandoned games count toward MCTS timing but not toward outcomes.
    pub fn record_game(&mut self, record: &GameRecord) {
        for (i, kind) in [self.black, self.white].into_iter().enumerate() {
            if kind == PlayerKind::Mcts {
                self.mcts_decisions += record.decisions[i] as u64;
                self.mcts_time_us += record.think_time[i].as_micros() as u64;
            }
        }

        if record.abandoned {
            self.games_abandoned += 1;
            return;
        }

        self.games_completed += 1;
        self.total_plies += record.plies as u64;
        self.total_margin += record.result.margin as u64;

        match record.result.winner() {
            Some(Side::Black) => self.black_wins += 1,
            Some(Side::White) => self.white_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Get a snapshot of current stats.
    pub fn snapshot(&self) -> MatchStatsSnapshot {
        let games = self.games_completed;

        let avg_margin = if games > 0 {
            self.total_margin as f64 / games as f64
        } else {
            0.0
        };

        let avg_plies = if games > 0 {
            self.total_plies as f64 / games as f64
        } else {
            0.0
        };

        let mcts_avg_decision_ms = if self.mcts_decisions > 0 {
            self.mcts_time_us as f64 / self.mcts_decisions as f64 / 1000.0
        } else {
            0.0
        };

        MatchStatsSnapshot {
            black_player: self.black.to_string(),
            white_player: self.white.to_string(),
            games_completed: games,
            games_abandoned: self.games_abandoned,
            black_wins: self.black_wins,
            white_wins: self.white_wins,
            draws: self.draws,
            avg_margin,
            avg_plies,
            mcts_decisions: self.mcts_decisions,
            mcts_avg_decision_ms,
            runtime_seconds: self.start_time.elapsed().as_secs_f64(),
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }

    /// Write stats to a JSON file (atomic write-then-rename).
    pub fn write_stats(&self, path: &Path) -> Result<()> {
        let snapshot = self.snapshot();
        let json =
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize match stats")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        // Write to temp file then rename (atomic on most filesystems)
        let mut temp_path = PathBuf::from(path);
        temp_path.as_mut_os_string().push(".tmp");

        let mut file = fs::File::create(&temp_path)
            .with_context(|| format!("Failed to create {}", temp_path.display()))?;
        file.write_all(json.as_bytes())
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;

        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e).with_context(|| format!("Failed to rename stats file to {}", path.display()));
        }

        debug!("Wrote match stats to {}", path.display());
        Ok(())
    }
}

impl fmt::Display for MatchStatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Games: {} completed, {} abandoned",
            self.games_completed, self.games_abandoned
        )?;
        writeln!(
            f,
            "Black(X) [{}] wins: {}  White(O) [{}] wins: {}  Draws: {}",
            self.black_player, self.black_wins, self.white_player, self.white_wins, self.draws
        )?;
        write!(
            f,
            "Avg margin: {:.1}  Avg plies: {:.1}",
            self.avg_margin, self.avg_plies
        )?;
        if self.mcts_decisions > 0 {
            write!(
                f,
                "  MCTS avg decision: {:.2} ms over {} decisions",
                self.mcts_avg_decision_ms, self.mcts_decisions
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::GameResult;
    use std::time::Duration;
    use tempfile::tempdir;

    fn record(black: u32, white: u32, plies: u32) -> GameRecord {
        GameRecord {
            result: GameResult::from_counts(black, white),
            black_discs: black,
            white_discs: white,
            plies,
            passes: 0,
            abandoned: false,
            think_time: [Duration::from_millis(30), Duration::from_millis(1)],
            decisions: [plies.div_ceil(2), plies / 2],
        }
    }

    #[test]
    fn test_record_games() {
        let mut stats = MatchStats::new(PlayerKind::Mcts, PlayerKind::Random);

        stats.record_game(&record(40, 24, 60)); // Black win by 16
        stats.record_game(&record(20, 44, 60)); // White win by 24
        stats.record_game(&record(32, 32, 58)); // Draw

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.games_completed, 3);
        assert_eq!(snapshot.black_wins, 1);
        assert_eq!(snapshot.white_wins, 1);
        assert_eq!(snapshot.draws, 1);
        assert!((snapshot.avg_margin - 40.0 / 3.0).abs() < 1e-9);
        assert!((snapshot.avg_plies - 178.0 / 3.0).abs() < 1e-9);
        assert_eq!(snapshot.black_player, "mcts");
        assert_eq!(snapshot.white_player, "random");
    }

    #[test]
    fn test_mcts_timing_only_counts_mcts_sides() {
        let mut stats = MatchStats::new(PlayerKind::Random, PlayerKind::Mcts);
        stats.record_game(&record(40, 24, 10)); // White made 5 decisions in 1 ms

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.mcts_decisions, 5);
        assert!((snapshot.mcts_avg_decision_ms - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_abandoned_games_skip_outcomes() {
        let mut stats = MatchStats::new(PlayerKind::Human, PlayerKind::Mcts);
        let mut game = record(5, 3, 4);
        game.abandoned = true;
        stats.record_game(&game);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.games_completed, 0);
        assert_eq!(snapshot.games_abandoned, 1);
        assert_eq!(snapshot.black_wins, 0);
        assert_eq!(snapshot.mcts_decisions, 2);
    }

    #[test]
    fn test_averages_with_zero_games() {
        let stats = MatchStats::new(PlayerKind::Random, PlayerKind::Random);
        let snapshot = stats.snapshot();

        // Averages should be 0.0, not NaN or panic
        assert_eq!(snapshot.avg_margin, 0.0);
        assert_eq!(snapshot.avg_plies, 0.0);
        assert_eq!(snapshot.mcts_avg_decision_ms, 0.0);
        assert!(!snapshot.avg_plies.is_nan());
    }

    #[test]
    fn test_write_stats() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("stats.json");
        let mut stats = MatchStats::new(PlayerKind::Mcts, PlayerKind::Random);
        stats.record_game(&record(40, 24, 60));

        stats.write_stats(&path).unwrap();

        // Verify file exists and is valid JSON
        assert!(path.exists());
        assert!(!dir.path().join("nested").join("stats.json.tmp").exists());
        let content = fs::read_to_string(&path).unwrap();
        let parsed: MatchStatsSnapshot = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.games_completed, 1);
        assert_eq!(parsed.black_wins, 1);
    }

    #[test]
    fn test_display_summary() {
        let mut stats = MatchStats::new(PlayerKind::Mcts, PlayerKind::Random);
        stats.record_game(&record(40, 24, 60));

        let text = stats.snapshot().to_string();
        assert!(text.contains("Games: 1 completed, 0 abandoned"));
        assert!(text.contains("Black(X) [mcts] wins: 1"));
        assert!(text.contains("Avg margin: 16.0"));
        assert!(text.contains("MCTS avg decision"));
    }
}
