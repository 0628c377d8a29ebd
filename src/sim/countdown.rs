//! Win-panel countdown
//!
//! A repeating one-second step driven by frame deltas rather than a platform
//! timer. It stops on its own when it reaches zero or when cancelled, so a
//! restart can never leave a stray repeating task behind.

use serde::{Deserialize, Serialize};

use crate::consts::COUNTDOWN_PERIOD_MS;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    /// Value currently shown
    pub remaining: u32,
    /// Time accumulated toward the next decrement
    elapsed_ms: f64,
    active: bool,
}

/// What advancing the countdown produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// No decrement this frame (or not running)
    Idle,
    /// Decremented to this value, still running
    Ticked(u32),
    /// Reached zero; the countdown is now stopped
    Finished,
}

impl Countdown {
    pub fn start(secs: u32) -> Self {
        Self {
            remaining: secs,
            elapsed_ms: 0.0,
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Feed wall-clock time; emits at most one step per call
    pub fn advance(&mut self, delta_ms: f64) -> CountdownStep {
        if !self.active {
            return CountdownStep::Idle;
        }
        if self.remaining == 0 {
            self.active = false;
            return CountdownStep::Finished;
        }

        self.elapsed_ms += delta_ms.max(0.0);
        if self.elapsed_ms < COUNTDOWN_PERIOD_MS {
            return CountdownStep::Idle;
        }

        // Long frames collapse into several decrements
        let periods = (self.elapsed_ms / COUNTDOWN_PERIOD_MS).floor();
        self.elapsed_ms -= periods * COUNTDOWN_PERIOD_MS;
        self.remaining = self.remaining.saturating_sub(periods as u32);

        if self.remaining == 0 {
            self.active = false;
            CountdownStep::Finished
        } else {
            CountdownStep::Ticked(self.remaining)
        }
    }
}
