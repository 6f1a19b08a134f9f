//! Stateful engine a presentation layer drives.
//!
//! `RoundEngine` owns the session, the current round, the RNG and the
//! auto-advance schedule. The presentation layer:
//!
//! 1. renders `view()`
//! 2. forwards clicks via `submit_guess` / `submit_option`
//! 3. forwards "new color" requests via `start_new_round`
//! 4. calls `tick` from its event loop so a solved round advances
//!
//! ```
//! use std::time::{Duration, Instant};
//! use color_guess::{GameConfig, GuessOutcome, RoundEngine};
//!
//! let mut engine = RoundEngine::new(GameConfig::new().with_seed(42)).unwrap();
//! let first = engine.round().id();
//!
//! let now = Instant::now();
//! let target = engine.round().target();
//! assert_eq!(engine.submit_guess(target, now), GuessOutcome::Correct);
//!
//! assert!(engine.tick(now + Duration::from_millis(1500)));
//! assert_ne!(engine.round().id(), first);
//! ```

use std::time::Instant;

use super::outcome::GuessOutcome;
use super::rules::{start_round, submit_guess};
use super::scheduler::{AutoAdvance, PendingAdvance};
use crate::core::{Color, GameConfig, GameRng, GameRngState, RandomSource, Round, RoundId, Session};
use crate::error::Result;
use crate::view::GameView;

/// Round engine: session + current round + scheduling.
#[derive(Clone, Debug)]
pub struct RoundEngine<R: RandomSource = GameRng> {
    config: GameConfig,
    rng: R,
    session: Session,
    round: Round,
    last_outcome: Option<GuessOutcome>,
    advance: AutoAdvance,
}

impl RoundEngine<GameRng> {
    /// Create an engine and start its first round.
    ///
    /// Seeds from `config.seed`, or from OS entropy when unset.
    pub fn new(config: GameConfig) -> Result<Self> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_source(config, rng)
    }

    /// Current RNG position, for replaying from this point.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<R: RandomSource> RoundEngine<R> {
    /// Create an engine drawing from `rng` and start its first round.
    pub fn with_source(config: GameConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        let mut session = Session::with_history_limit(config.history_limit);
        let round = start_round(&mut rng, &config, &mut session, RoundId::FIRST);

        Ok(Self {
            config,
            rng,
            session,
            round,
            last_outcome: None,
            advance: AutoAdvance::new(),
        })
    }

    /// Abandon the current round and start another.
    ///
    /// No penalty: score and attempts are unchanged. Any pending
    /// auto-advance is cancelled so it can't replace the new round.
    pub fn start_new_round(&mut self) -> &Round {
        self.advance.cancel();
        self.begin_round();
        &self.round
    }

    /// Submit a guess for the current round.
    ///
    /// A correct guess schedules the next round `advance_delay` after `now`
    /// (when auto-advance is on).
    pub fn submit_guess(&mut self, guessed: Color, now: Instant) -> GuessOutcome {
        let outcome = submit_guess(&mut self.round, &mut self.session, guessed);

        if outcome.is_counted() {
            self.last_outcome = Some(outcome);
        }
        if outcome == GuessOutcome::Correct && self.config.auto_advance {
            self.advance
                .schedule(self.round.id(), now, self.config.advance_delay);
        }

        outcome
    }

    /// Submit the option at `index` in display order.
    ///
    /// Returns `None` if there is no such option.
    pub fn submit_option(&mut self, index: usize, now: Instant) -> Option<GuessOutcome> {
        let guessed = *self.round.options().get(index)?;
        Some(self.submit_guess(guessed, now))
    }

    /// Advance time. Starts the next round if a pending advance for the
    /// current round is due; returns whether it did.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.advance.poll(now, self.round.id()) {
            self.begin_round();
            true
        } else {
            false
        }
    }

    fn begin_round(&mut self) {
        let id = self.round.id().next();
        self.round = start_round(&mut self.rng, &self.config, &mut self.session, id);
        self.last_outcome = None;
    }

    // === Read-only state ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Outcome of the last counted guess this round.
    #[must_use]
    pub fn last_outcome(&self) -> Option<GuessOutcome> {
        self.last_outcome
    }

    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.last_outcome.and_then(GuessOutcome::message)
    }

    #[must_use]
    pub fn pending_advance(&self) -> Option<PendingAdvance> {
        self.advance.pending()
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::new(&self.round, &self.session, self.last_outcome)
    }
}
