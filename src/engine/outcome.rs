//! Result of submitting a guess.

use serde::{Deserialize, Serialize};

/// Outcome tag for a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    /// The guess matched the target; the round is now solved.
    Correct,
    /// The guess did not match; the round stays open.
    Incorrect,
    /// The round was already solved; nothing changed.
    Ignored,
}

impl GuessOutcome {
    /// Whether the guess was counted as an attempt.
    #[must_use]
    pub fn is_counted(self) -> bool {
        !matches!(self, GuessOutcome::Ignored)
    }

    /// Message a presentation layer shows for this outcome.
    ///
    /// `Ignored` has none: the previous message stays up.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            GuessOutcome::Correct => Some("Correct! 🎉"),
            GuessOutcome::Incorrect => Some("Try again!"),
            GuessOutcome::Ignored => None,
        }
    }
}

impl std::fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GuessOutcome::Correct => "correct",
            GuessOutcome::Incorrect => "incorrect",
            GuessOutcome::Ignored => "ignored",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(GuessOutcome::Correct.message(), Some("Correct! 🎉"));
        assert_eq!(GuessOutcome::Incorrect.message(), Some("Try again!"));
        assert_eq!(GuessOutcome::Ignored.message(), None);
    }

    #[test]
    fn test_is_counted() {
        assert!(GuessOutcome::Correct.is_counted());
        assert!(GuessOutcome::Incorrect.is_counted());
        assert!(!GuessOutcome::Ignored.is_counted());
    }

    #[test]
    fn test_display_and_serde_agree() {
        for outcome in [GuessOutcome::Correct, GuessOutcome::Incorrect, GuessOutcome::Ignored] {
            let json = serde_json::to_string(&outcome).unwrap();
            assert_eq!(json, format!("\"{}\"", outcome));
        }
    }
}
