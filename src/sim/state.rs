//! Round state and core simulation types
//!
//! Everything a round needs lives in one `GameState`; a restart replaces it
//! wholesale. The best-time record is deliberately not part of it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::countdown::Countdown;
use super::playfield::Playfield;
use super::projectile::Projectile;
use super::score::Scoreboard;
use super::target::Target;
use crate::settings::Settings;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Shooting at the target
    Playing,
    /// Win threshold reached; waiting for the countdown or a click
    Won {
        /// Frozen run time (seconds)
        run_time: f64,
        /// Fastest recorded run, filled in once the record has been checked
        best_time: Option<f64>,
        countdown: Countdown,
    },
}

/// Things that happened during a tick, for the display and the driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A projectile was launched
    Fired,
    /// The projectile left the top of the playfield
    Missed,
    /// The projectile hit the target
    Hit { point: Vec2, score: u32 },
    /// The win threshold was reached
    Won { run_time: f64 },
    /// The win countdown moved on
    CountdownTick { remaining: u32 },
    /// The round should be reset
    RestartRequested,
}

/// Hit flash
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Blast {
    pub point: Vec2,
    pub remaining_ms: f64,
}

/// Complete round state (deterministic for a given seed and frame sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Round seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub settings: Settings,
    pub playfield: Playfield,
    pub target: Target,
    /// At most one projectile in flight
    pub projectile: Option<Projectile>,
    pub scoreboard: Scoreboard,
    pub phase: GamePhase,
    /// Clock reading when the round began (ms)
    pub started_at_ms: f64,
    /// Seconds since the round began; frozen on win
    pub run_time: f64,
    pub blast: Option<Blast>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Start a round at clock reading `now_ms`
    pub fn new(seed: u64, settings: Settings, playfield: Playfield, now_ms: f64) -> Self {
        let settings = settings.sanitized();
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut target = Target::new(settings.target_width, settings.target_height);
        target.reset(&playfield, &settings, &mut rng);

        Self {
            seed,
            rng,
            scoreboard: Scoreboard::new(settings.win_score),
            settings,
            playfield,
            target,
            projectile: None,
            phase: GamePhase::Playing,
            started_at_ms: now_ms,
            run_time: 0.0,
            blast: None,
            time_ticks: 0,
        }
    }

    /// Full reset: fresh round seeded from this one, same settings and
    /// playfield
    pub fn reset(&mut self, now_ms: f64) {
        let seed = self.rng.random::<u64>();
        let settings = std::mem::take(&mut self.settings);
        *self = Self::new(seed, settings, self.playfield, now_ms);
    }

    /// A projectile is currently in flight
    #[inline]
    pub fn in_flight(&self) -> bool {
        self.projectile.is_some()
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.scoreboard.score
    }

    pub fn is_won(&self) -> bool {
        matches!(self.phase, GamePhase::Won { .. })
    }

    /// Launch a projectile. Dropped (returns false) while one is already in
    /// flight or after the round is won.
    pub fn fire(&mut self) -> bool {
        if self.in_flight() || self.is_won() {
            return false;
        }
        self.projectile = Some(Projectile::spawn(&self.playfield, &self.settings));
        true
    }

    /// Apply a new playfield size (window resize)
    pub fn set_playfield(&mut self, playfield: Playfield) {
        if playfield != self.playfield {
            self.playfield = playfield;
            self.target.fit_to(&self.playfield);
        }
    }

    /// Store the checked best time on the win panel
    pub fn record_best_time(&mut self, best: Option<f64>) {
        if let GamePhase::Won { best_time, .. } = &mut self.phase {
            *best_time = best;
        }
    }
}
