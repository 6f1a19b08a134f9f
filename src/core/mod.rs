//! Core types: colors, RNG, configuration, rounds and sessions.
//!
//! These are plain values with no scheduling or rendering concerns; the
//! `engine` module drives them.

pub mod color;
pub mod config;
pub mod rng;
pub mod round;
pub mod session;

pub use color::Color;
pub use config::{GameConfig, MAX_OPTION_COUNT};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use round::{Options, Round, RoundId, RoundStatus};
pub use session::{GuessRecord, Session};
