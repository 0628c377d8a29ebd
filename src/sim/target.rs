//! The bouncing target
//!
//! Moves horizontally at constant speed and reverses at the playfield edges.
//! Each round it is re-centred, given a new height in the upper band of the
//! playfield and a new speed.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::playfield::Playfield;
use super::rect::Rect;
use crate::consts::*;
use crate::settings::Settings;

/// Horizontal travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub rect: Rect,
    pub direction: Direction,
    /// Pixels per loop unit
    pub speed: f32,
    /// Top edge as a percentage of the playfield height
    pub band_pct: f32,
}

impl Target {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, width, height),
            direction: Direction::Right,
            speed: 0.0,
            band_pct: TARGET_BAND_TOP_PCT,
        }
    }

    /// Largest left edge that keeps the target fully on the playfield
    #[inline]
    pub fn max_left(&self, playfield_width: f32) -> f32 {
        (playfield_width - self.rect.width).max(0.0)
    }

    /// Re-centre, pick a height in the upper band and a speed in the band
    pub fn reset<R: Rng>(&mut self, playfield: &Playfield, settings: &Settings, rng: &mut R) {
        let max_left = self.max_left(playfield.width);
        let centred = (playfield.width - self.rect.width) / 2.0;
        self.rect.left = centred.max(TARGET_MIN_OFFSET).min(max_left);

        self.band_pct = rng.random_range(TARGET_BAND_TOP_PCT..=TARGET_BAND_BOTTOM_PCT);
        self.rect.top = playfield.height * self.band_pct / 100.0;

        let factor = rng.random_range(
            settings.target_speed_min_factor..=settings.target_speed_max_factor,
        );
        self.speed = settings.target_speed * factor;
        self.direction = Direction::Right;
    }

    /// Follow a playfield resize: same relative height, pulled back inside
    /// horizontally
    pub fn fit_to(&mut self, playfield: &Playfield) {
        self.rect.top = playfield.height * self.band_pct / 100.0;
        self.rect.left = self.rect.left.clamp(0.0, self.max_left(playfield.width));
    }

    /// Advance by `dt` loop units, bouncing off either edge
    pub fn update(&mut self, dt: f32, playfield_width: f32) {
        self.rect.left += self.speed * dt * self.direction.sign();

        if self.rect.left <= 0.0 {
            self.rect.left = 0.0;
            self.direction = Direction::Right;
        } else if self.rect.right() >= playfield_width {
            self.rect.left = self.max_left(playfield_width);
            self.direction = Direction::Left;
        }
    }
}
