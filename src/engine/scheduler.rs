//! Auto-advance after a solved round.
//!
//! A correct guess schedules the next round for `now + delay`. The schedule
//! is keyed to the round it was issued for: if that round is no longer
//! current when the deadline passes (the player already asked for a new one),
//! the entry is dropped without firing.
//!
//! Time is passed in by the caller, so the scheduler never sleeps or spawns.

use std::time::{Duration, Instant};
use tracing::debug;

use crate::core::RoundId;

/// A scheduled advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAdvance {
    /// Round that was solved.
    pub round: RoundId,
    /// When the next round should start.
    pub due: Instant,
}

/// Single-slot scheduler for the delayed round restart.
#[derive(Clone, Debug, Default)]
pub struct AutoAdvance {
    pending: Option<PendingAdvance>,
}

impl AutoAdvance {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an advance for `round`, replacing any earlier one.
    pub fn schedule(&mut self, round: RoundId, now: Instant, delay: Duration) {
        self.pending = Some(PendingAdvance {
            round,
            due: now + delay,
        });
    }

    /// Drop the pending advance, if any. Returns what was dropped.
    pub fn cancel(&mut self) -> Option<PendingAdvance> {
        let cancelled = self.pending.take();
        if let Some(p) = cancelled {
            debug!(round = %p.round, "pending advance cancelled");
        }
        cancelled
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingAdvance> {
        self.pending
    }

    /// Fire if due and still for the `current` round.
    ///
    /// A due entry for any other round is stale and is discarded. An entry
    /// that isn't due yet is kept.
    pub fn poll(&mut self, now: Instant, current: RoundId) -> bool {
        match self.pending {
            Some(p) if now >= p.due => {
                self.pending = None;
                if p.round == current {
                    true
                } else {
                    debug!(round = %p.round, current = %current, "stale advance discarded");
                    false
                }
            }
            _ => false,
        }
    }
}
