//! # color-guess
//!
//! Round engine for a single-screen color-guessing game: a target color is
//! shown, the player picks its RGB triple from 3-6 options, and score and
//! attempt counters update.
//!
//! ## Design
//!
//! - **Explicit state**: a `Session` (counters) and a `Round` (target,
//!   options, solved flag) are values passed to the engine functions, so
//!   everything is testable without a front end.
//!
//! - **Deterministic**: all randomness goes through `RandomSource`; the
//!   default `GameRng` is a seeded ChaCha8 stream.
//!
//! - **No hidden timers**: the delayed restart after a correct guess is a
//!   schedule keyed to the solved round, fired by `RoundEngine::tick`. A
//!   manual restart cancels it, and a stale one never fires.
//!
//! ## Modules
//!
//! - `core`: Color, RNG, configuration, Round, Session
//! - `engine`: option generation, guess evaluation, auto-advance, `RoundEngine`
//! - `view`: render snapshot for presentation layers
//! - `error`: configuration and color-parsing errors

pub mod core;
pub mod engine;
pub mod error;
pub mod view;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Color, GameConfig, GameRng, GameRngState, GuessRecord, RandomSource, Round, RoundId,
    RoundStatus, Session,
};

pub use crate::engine::{
    generate_color, generate_options, start_round, submit_guess, AutoAdvance, GuessOutcome,
    PendingAdvance, RoundEngine,
};

pub use crate::error::{ConfigError, ParseColorError, StateError};
pub use crate::view::{GameView, OptionView};
