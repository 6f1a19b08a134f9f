//! Game configuration.
//!
//! A `GameConfig` fixes everything about a session that isn't random:
//! how many options a round may show, whether and when a solved round
//! advances on its own, and the RNG seed.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

use crate::error::ConfigError;

/// Largest option set a round may present.
pub const MAX_OPTION_COUNT: usize = 16;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fewest options per round (target included).
    pub min_options: usize,

    /// Most options per round (target included).
    pub max_options: usize,

    /// Delay between solving a round and the next one starting.
    pub advance_delay: Duration,

    /// Start the next round automatically after a correct guess.
    pub auto_advance: bool,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Most guess records a session keeps. `None` keeps them all.
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_options: 3,
            max_options: 6,
            advance_delay: Duration::from_millis(1500),
            auto_advance: true,
            seed: None,
            history_limit: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the option count range.
    #[must_use]
    pub fn with_option_range(mut self, min: usize, max: usize) -> Self {
        self.min_options = min;
        self.max_options = max;
        self
    }

    /// Set the auto-advance delay.
    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    /// Disable auto-advance: rounds only change on request.
    #[must_use]
    pub fn manual_advance(mut self) -> Self {
        self.auto_advance = false;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cap the session's guess history.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Option counts as a range.
    #[must_use]
    pub fn option_counts(&self) -> RangeInclusive<usize> {
        self.min_options..=self.max_options
    }

    /// Check the configuration can produce valid rounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_options == 0 {
            return Err(ConfigError::NoOptions(self.min_options));
        }
        if self.min_options > self.max_options {
            return Err(ConfigError::EmptyRange {
                min: self.min_options,
                max: self.max_options,
            });
        }
        if self.max_options > MAX_OPTION_COUNT {
            return Err(ConfigError::TooManyOptions {
                max: self.max_options,
                limit: MAX_OPTION_COUNT,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.option_counts(), 3..=6);
        assert_eq!(config.advance_delay, Duration::from_millis(1500));
        assert!(config.auto_advance);
        assert_eq!(config.seed, None);
        assert_eq!(config.history_limit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_option_range(4, 4)
            .with_advance_delay(Duration::ZERO)
            .manual_advance()
            .with_seed(9)
            .with_history_limit(50);

        assert_eq!(config.option_counts(), 4..=4);
        assert_eq!(config.advance_delay, Duration::ZERO);
        assert!(!config.auto_advance);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.history_limit, Some(50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        assert_eq!(
            GameConfig::new().with_option_range(0, 3).validate(),
            Err(ConfigError::NoOptions(0))
        );
        assert_eq!(
            GameConfig::new().with_option_range(5, 3).validate(),
            Err(ConfigError::EmptyRange { min: 5, max: 3 })
        );
        assert_eq!(
            GameConfig::new().with_option_range(3, 17).validate(),
            Err(ConfigError::TooManyOptions { max: 17, limit: MAX_OPTION_COUNT })
        );
    }

    #[test]
    fn test_single_option_is_valid() {
        assert!(GameConfig::new().with_option_range(1, 1).validate().is_ok());
    }

    #[test]
    fn test_serde() {
        let config = GameConfig::new().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
