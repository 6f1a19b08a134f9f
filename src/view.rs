//! Read-only render state for presentation layers.
//!
//! A `GameView` is everything needed to draw the screen: the target swatch,
//! the option buttons in order, the counters and the current message. It
//! serializes to JSON for non-Rust front ends.

use serde::Serialize;

use crate::core::{Color, Round, RoundId, Session};
use crate::engine::GuessOutcome;

/// One option button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub color: Color,
    /// `rgb(R, G, B)`
    pub css: String,
    /// `RGB(R, G, B)`
    pub label: String,
}

impl From<Color> for OptionView {
    fn from(color: Color) -> Self {
        Self {
            color,
            css: color.css(),
            label: color.label(),
        }
    }
}

/// Snapshot of engine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub round: RoundId,
    pub target_css: String,
    pub options: Vec<OptionView>,
    pub score: u64,
    pub attempts: u64,
    pub solved: bool,
    pub outcome: Option<GuessOutcome>,
    pub message: Option<&'static str>,
}

impl GameView {
    #[must_use]
    pub fn new(round: &Round, session: &Session, outcome: Option<GuessOutcome>) -> Self {
        Self {
            round: round.id(),
            target_css: round.target().css(),
            options: round.options().iter().copied().map(OptionView::from).collect(),
            score: session.score(),
            attempts: session.attempts(),
            solved: round.is_solved(),
            outcome,
            message: outcome.and_then(GuessOutcome::message),
        }
    }
}
