//! The round engine: generation, guess evaluation and auto-advance.
//!
//! - `generation`: random colors and duplicate-free option sets
//! - `rules`: `start_round` / `submit_guess` over an explicit Session + Round
//! - `scheduler`: delayed restart keyed to the solved round
//! - `round_engine`: `RoundEngine`, the stateful facade for front ends

pub mod generation;
pub mod outcome;
pub mod round_engine;
pub mod rules;
pub mod scheduler;

pub use generation::{generate_color, generate_options};
pub use outcome::GuessOutcome;
pub use round_engine::RoundEngine;
pub use rules::{start_round, submit_guess};
pub use scheduler::{AutoAdvance, PendingAdvance};
