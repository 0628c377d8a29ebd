//! Playfield bounds and the player marker

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// The bounded area the target and projectile move in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    /// Player marker, in playfield coordinates
    pub player: Rect,
}

impl Playfield {
    /// Playfield with the player marker at the bottom centre
    pub fn new(width: f32, height: f32) -> Self {
        let width = sanitize_dimension(width, PLAYFIELD_FALLBACK_WIDTH);
        let height = sanitize_dimension(height, PLAYFIELD_FALLBACK_HEIGHT);
        let player = Rect::new(
            (width - PLAYER_WIDTH) / 2.0,
            height - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
        );
        Self {
            width,
            height,
            player,
        }
    }

    /// Playfield with an explicitly measured player marker (e.g. from the DOM)
    pub fn with_player(width: f32, height: f32, player: Rect) -> Self {
        Self {
            width: sanitize_dimension(width, PLAYFIELD_FALLBACK_WIDTH),
            height: sanitize_dimension(height, PLAYFIELD_FALLBACK_HEIGHT),
            player,
        }
    }

    /// Where a projectile's centre starts: above the player's top-centre
    pub fn muzzle(&self, projectile_height: f32) -> Vec2 {
        Vec2::new(
            self.player.center_x(),
            self.player.top - PROJECTILE_SPAWN_OFFSET + projectile_height / 2.0,
        )
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(PLAYFIELD_FALLBACK_WIDTH, PLAYFIELD_FALLBACK_HEIGHT)
    }
}

/// Zero, negative and non-finite sizes fall back so nothing downstream divides
/// by zero or propagates NaN
fn sanitize_dimension(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
