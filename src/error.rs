//! Error types.
//!
//! Round generation and guess evaluation never fail; errors only arise at the
//! edges, when building an engine from a bad configuration or when an outer
//! surface hands us a color string we cannot read.

use thiserror::Error;

/// Invalid `GameConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A round needs at least the target among its options.
    #[error("min_options must be at least 1, got {0}")]
    NoOptions(usize),

    /// The option count range is empty.
    #[error("min_options ({min}) is greater than max_options ({max})")]
    EmptyRange { min: usize, max: usize },

    /// More options than a round can present.
    #[error("max_options ({max}) exceeds the limit of {limit}")]
    TooManyOptions { max: usize, limit: usize },
}

/// Failure to read a color from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Nothing to parse.
    #[error("empty color string")]
    Empty,

    /// `rgb(` without a closing parenthesis.
    #[error("unterminated color function: {0:?}")]
    Unterminated(String),

    /// Not exactly three comma-separated channels.
    #[error("expected 3 channels, found {0}")]
    ChannelCount(usize),

    /// A channel that is not an integer.
    #[error("invalid channel value: {0:?}")]
    InvalidChannel(String),

    /// An integer channel outside 0-255.
    #[error("channel value {0} is outside 0-255")]
    OutOfRange(String),
}

/// Round or session data that breaks its invariants.
///
/// Returned when deserializing a `Round` or `Session`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// Target missing from the options, or present more than once.
    #[error("Options must contain the target exactly once")]
    TargetNotOnce,

    /// Two options with the same color.
    #[error("Options must be pairwise distinct")]
    DuplicateOption,

    /// More points than guesses.
    #[error("score ({score}) exceeds attempts ({attempts})")]
    ScoreExceedsAttempts { score: u64, attempts: u64 },

    /// History doesn't match the counters it should mirror.
    #[error("history holds {len} guesses, expected {expected}")]
    HistoryLength { len: usize, expected: u64 },

    /// History disagrees with the counters on outcomes.
    #[error("history outcomes disagree with score {score} and attempts {attempts}")]
    HistoryOutcomes { score: u64, attempts: u64 },
}

/// Crate result alias for fallible construction.
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
