//! Round lifecycle and guess evaluation.
//!
//! These are plain functions over an explicit `Session` + `Round` pair, so
//! they can be driven and tested without any presentation layer. The
//! `RoundEngine` facade wires them to the RNG and auto-advance scheduler.

use tracing::{debug, info};

use super::generation::{generate_color, generate_options};
use super::outcome::GuessOutcome;
use crate::core::{Color, GameConfig, GuessRecord, RandomSource, Round, RoundId, Session};

/// Generate a fresh, active round.
///
/// Counts the round in `session`; score and attempts are untouched, so
/// abandoning a round by starting another carries no penalty. Never fails:
/// an unvalidated option range is clamped by `generate_options`.
pub fn start_round<R: RandomSource + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
    session: &mut Session,
    id: RoundId,
) -> Round {
    let target = generate_color(rng);
    let options = generate_options(rng, target, config.option_counts());
    session.round_started();

    debug!(round = %id, %target, options = options.len(), "round started");
    Round::new(id, target, options)
}

/// Evaluate a guess against the round's target.
///
/// - Solved round: `Ignored`, nothing changes
/// - Otherwise the attempt is counted, then
///   - match: round becomes solved, score goes up, `Correct`
///   - no match: `Incorrect`, player may keep guessing
///
/// `guessed` need not be one of the options; only the target matters.
pub fn submit_guess(round: &mut Round, session: &mut Session, guessed: Color) -> GuessOutcome {
    if round.is_solved() {
        return GuessOutcome::Ignored;
    }

    let outcome = if guessed == round.target() {
        round.mark_solved();
        GuessOutcome::Correct
    } else {
        GuessOutcome::Incorrect
    };

    session.record_guess(GuessRecord {
        round: round.id(),
        guessed,
        outcome,
    });

    if outcome == GuessOutcome::Correct {
        info!(
            round = %round.id(),
            score = session.score(),
            attempts = session.attempts(),
            "round solved"
        );
    }

    outcome
}
