//! Session: counters that span rounds.
//!
//! ## Counters
//!
//! - `score`: rounds solved
//! - `attempts`: guesses counted (ignored guesses excluded)
//! - `rounds_started`: rounds generated, including abandoned ones
//!
//! Every score increment happens in the same guess as an attempt increment,
//! so `attempts >= score` always holds.
//!
//! ## History
//!
//! Counted guesses are logged in an `im::Vector`, so cloning a session to
//! inspect or replay it is O(1). Nothing is persisted. The log is unbounded
//! unless a history limit is set, in which case the oldest records are
//! dropped; the counters always cover every guess.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::round::RoundId;
use crate::engine::GuessOutcome;
use crate::error::StateError;

/// A counted guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// Round the guess was made in.
    pub round: RoundId,
    /// The color guessed.
    pub guessed: Color,
    /// `Correct` or `Incorrect`.
    pub outcome: GuessOutcome,
}

/// Cross-round counters.
///
/// Deserialization rejects counters and history that disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSession")]
pub struct Session {
    score: u64,
    attempts: u64,
    rounds_started: u64,
    history: Vector<GuessRecord>,
    history_limit: Option<usize>,
}

impl Session {
    /// Create an empty session with an unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session keeping at most `limit` history records.
    #[must_use]
    pub fn with_history_limit(limit: Option<usize>) -> Self {
        Self {
            history_limit: limit,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn history_limit(&self) -> Option<usize> {
        self.history_limit
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    #[must_use]
    pub fn rounds_started(&self) -> u64 {
        self.rounds_started
    }

    /// Counted guesses, oldest first. Only the most recent ones when a
    /// history limit is set.
    #[must_use]
    pub fn history(&self) -> &Vector<GuessRecord> {
        &self.history
    }

    /// Guesses counted in a given round.
    pub fn guesses_in(&self, round: RoundId) -> impl Iterator<Item = &GuessRecord> {
        self.history.iter().filter(move |r| r.round == round)
    }

    pub(crate) fn round_started(&mut self) {
        self.rounds_started += 1;
    }

    /// Count a guess. Ignored guesses must not reach here.
    pub(crate) fn record_guess(&mut self, record: GuessRecord) {
        debug_assert!(record.outcome.is_counted());

        self.attempts += 1;
        if record.outcome == GuessOutcome::Correct {
            self.score += 1;
        }
        self.history.push_back(record);
        if let Some(limit) = self.history_limit {
            while self.history.len() > limit {
                self.history.pop_front();
            }
        }
    }
}

/// Unchecked wire form of `Session`.
#[derive(Deserialize)]
struct RawSession {
    score: u64,
    attempts: u64,
    rounds_started: u64,
    history: Vector<GuessRecord>,
    #[serde(default)]
    history_limit: Option<usize>,
}

impl TryFrom<RawSession> for Session {
    type Error = StateError;

    fn try_from(raw: RawSession) -> Result<Self, Self::Error> {
        let RawSession {
            score,
            attempts,
            rounds_started,
            history,
            history_limit,
        } = raw;

        if score > attempts {
            return Err(StateError::ScoreExceedsAttempts { score, attempts });
        }

        let kept = history_limit.map_or(attempts, |l| attempts.min(l as u64));
        if history.len() as u64 != kept {
            return Err(StateError::HistoryLength {
                len: history.len(),
                expected: kept,
            });
        }

        let correct = history.iter().filter(|r| r.outcome == GuessOutcome::Correct).count() as u64;
        let incorrect = history.iter().filter(|r| r.outcome == GuessOutcome::Incorrect).count() as u64;
        let outcomes_fit = if kept == attempts {
            correct == score && incorrect == attempts - score
        } else {
            correct <= score && incorrect <= attempts - score && correct + incorrect == kept
        };
        if !outcomes_fit {
            return Err(StateError::HistoryOutcomes { score, attempts });
        }

        Ok(Self {
            score,
            attempts,
            rounds_started,
            history,
            history_limit,
        })
    }
}
