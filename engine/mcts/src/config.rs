//! UCT search configuration parameters.

use crate::search::SearchError;

/// Configuration for UCT Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq)]
pub struct UctConfig {
    /// Number of select/expand/simulate/backpropagate iterations per decision.
    pub iterations: u32,

    /// Exploration constant `C` in the UCB1 formula.
    /// Higher values encourage exploration, lower values favor exploitation.
    pub exploration: f64,

    /// Hard cap on plies played in a single random rollout.
    /// A rollout that hits the cap is scored on the board as it stands.
    pub rollout_ply_cap: u32,

    /// Base reward magnitude for a decisive rollout; the disc margin is added
    /// on top.
    pub win_bonus: f64,
}

impl Default for UctConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            exploration: 1.5,
            rollout_ply_cap: 50,
            win_bonus: 10.0,
        }
    }
}

impl UctConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            iterations: 25,
            rollout_ply_cap: 20,
            ..Self::default()
        }
    }

    /// Builder pattern: set the iteration budget.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.iterations = n;
        self
    }

    /// Builder pattern: set the exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Builder pattern: set the rollout ply cap.
    pub fn with_rollout_ply_cap(mut self, plies: u32) -> Self {
        self.rollout_ply_cap = plies;
        self
    }

    /// Builder pattern: set the win bonus.
    pub fn with_win_bonus(mut self, bonus: f64) -> Self {
        self.win_bonus = bonus;
        self
    }

    /// Reject parameter sets the search cannot run with.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.iterations == 0 {
            return Err(SearchError::InvalidConfig(
                "iterations must be at least 1".to_string(),
            ));
        }
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "exploration must be finite and non-negative, got {}",
                self.exploration
            )));
        }
        if self.rollout_ply_cap == 0 {
            return Err(SearchError::InvalidConfig(
                "rollout_ply_cap must be at least 1".to_string(),
            ));
        }
        if !self.win_bonus.is_finite() {
            return Err(SearchError::InvalidConfig(format!(
                "win_bonus must be finite, got {}",
                self.win_bonus
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UctConfig::default();
        assert_eq!(config.iterations, 50);
        assert!((config.exploration - 1.5).abs() < 1e-12);
        assert_eq!(config.rollout_ply_cap, 50);
        assert!((config.win_bonus - 10.0).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = UctConfig::default()
            .with_iterations(200)
            .with_exploration(0.7)
            .with_rollout_ply_cap(64)
            .with_win_bonus(0.0);

        assert_eq!(config.iterations, 200);
        assert!((config.exploration - 0.7).abs() < 1e-12);
        assert_eq!(config.rollout_ply_cap, 64);
        assert_eq!(config.win_bonus, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_testing_config_is_valid() {
        let config = UctConfig::for_testing();
        assert!(config.iterations < UctConfig::default().iterations);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            UctConfig::default().with_iterations(0),
            UctConfig::default().with_exploration(-1.0),
            UctConfig::default().with_exploration(f64::NAN),
            UctConfig::default().with_rollout_ply_cap(0),
            UctConfig::default().with_win_bonus(f64::INFINITY),
        ];

        for config in cases {
            assert!(
                matches!(config.validate(), Err(SearchError::InvalidConfig(_))),
                "{:?} should be rejected",
                config
            );
        }
    }
}
