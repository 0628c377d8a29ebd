//! The single in-flight projectile
//!
//! Travels straight up at constant speed. Remembers where it was on the
//! previous tick so the collision check can detect crossings.

use serde::{Deserialize, Serialize};

use super::playfield::Playfield;
use super::rect::Rect;
use crate::settings::Settings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    /// Top edge on the previous tick
    pub prev_top: f32,
    /// Pixels per loop unit (upward)
    pub speed: f32,
}

/// Outcome of advancing a projectile by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flight {
    InFlight,
    /// Left through the top of the playfield
    Exited,
}

impl Projectile {
    /// Spawn above the player's top-centre
    pub fn spawn(playfield: &Playfield, settings: &Settings) -> Self {
        let rect = Rect::centered_at(
            playfield.muzzle(settings.projectile_height),
            settings.projectile_width,
            settings.projectile_height,
        );
        Self {
            rect,
            prev_top: rect.top,
            speed: settings.projectile_speed,
        }
    }

    /// Centre line on the previous tick
    #[inline]
    pub fn prev_center_y(&self) -> f32 {
        self.prev_top + self.rect.height / 2.0
    }

    /// Move up by `dt` loop units
    pub fn advance(&mut self, dt: f32, exit_margin: f32) -> Flight {
        self.prev_top = self.rect.top;
        self.rect.top -= self.speed * dt;

        if self.rect.top < -exit_margin {
            Flight::Exited
        } else {
            Flight::InFlight
        }
    }
}
