//! A single round: target color, the options offered, and whether it's solved.
//!
//! ## Invariants
//!
//! - `options` is non-empty and pairwise distinct
//! - `target` appears in `options` exactly once
//! - `solved` only ever goes from false to true; a solved round is replaced,
//!   never reopened

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use crate::error::StateError;

/// Ordered option set. Inline storage covers the default 3-6 options.
pub type Options = SmallVec<[Color; 6]>;

/// Identifier of a round within a session.
///
/// Round IDs increase by one each time a round starts, so a stale ID can
/// always be told apart from the current one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl RoundId {
    /// The first round of a session.
    pub const FIRST: RoundId = RoundId(0);

    /// The ID following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}

/// Round state machine states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Accepting guesses.
    Active,
    /// Target matched; further guesses are ignored.
    Solved,
}

/// One round of the game.
///
/// Deserialization goes through the same checks as `Round::new`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRound")]
pub struct Round {
    id: RoundId,
    target: Color,
    options: Options,
    solved: bool,
}

impl Round {
    /// Create an active round.
    ///
    /// # Panics
    ///
    /// If `options` doesn't contain `target` exactly once or contains
    /// duplicates.
    #[must_use]
    pub fn new(id: RoundId, target: Color, options: impl IntoIterator<Item = Color>) -> Self {
        let options: Options = options.into_iter().collect();

        if let Err(e) = check_options(target, &options) {
            panic!("{}", e);
        }

        Self {
            id,
            target,
            options,
            solved: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> RoundId {
        self.id
    }

    /// The color to match.
    #[must_use]
    pub fn target(&self) -> Color {
        self.target
    }

    /// Options in display order.
    #[must_use]
    pub fn options(&self) -> &[Color] {
        &self.options
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.solved {
            RoundStatus::Solved
        } else {
            RoundStatus::Active
        }
    }

    /// Whether `color` is one of the options.
    #[must_use]
    pub fn offers(&self, color: Color) -> bool {
        self.options.contains(&color)
    }

    /// Active -> Solved. There is no way back.
    pub(crate) fn mark_solved(&mut self) {
        self.solved = true;
    }
}

fn check_options(target: Color, options: &[Color]) -> Result<(), StateError> {
    if options.iter().filter(|&&c| c == target).count() != 1 {
        return Err(StateError::TargetNotOnce);
    }
    for (i, a) in options.iter().enumerate() {
        if options[i + 1..].contains(a) {
            return Err(StateError::DuplicateOption);
        }
    }
    Ok(())
}

/// Unchecked wire form of `Round`.
#[derive(Deserialize)]
struct RawRound {
    id: RoundId,
    target: Color,
    options: Options,
    solved: bool,
}

impl TryFrom<RawRound> for Round {
    type Error = StateError;

    fn try_from(raw: RawRound) -> Result<Self, Self::Error> {
        check_options(raw.target, &raw.options)?;
        Ok(Self {
            id: raw.id,
            target: raw.target,
            options: raw.options,
            solved: raw.solved,
        })
    }
}
