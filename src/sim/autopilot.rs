//! Demo player
//!
//! Fires when a shot launched now would meet the target: the target is
//! simulated forward (bounces included) for as long as the projectile needs
//! to climb to the target's centre line.

use super::projectile::Projectile;
use super::state::GameState;

/// Prediction step in loop units
const PREDICTION_STEP: f32 = 0.1;
/// Cap on prediction steps for very slow settings
const MAX_PREDICTION_STEPS: u32 = 2_000;
/// Fraction of the target width kept clear on each side when aiming
const AIM_MARGIN: f32 = 0.2;

/// Whether firing this tick is expected to hit
pub fn should_fire(state: &GameState) -> bool {
    if state.in_flight() || state.is_won() {
        return false;
    }

    let shot = Projectile::spawn(&state.playfield, &state.settings);
    let climb = shot.rect.center_y() - state.target.rect.center_y();
    if climb <= 0.0 {
        // Target is level with or below the muzzle
        return false;
    }

    let mut ghost = state.target.clone();
    let mut remaining = climb / shot.speed;
    let mut steps = 0;
    while remaining > 0.0 && steps < MAX_PREDICTION_STEPS {
        let step = remaining.min(PREDICTION_STEP);
        ghost.update(step, state.playfield.width);
        remaining -= step;
        steps += 1;
    }

    let margin = ghost.rect.width * AIM_MARGIN;
    let x = shot.rect.center_x();
    x >= ghost.rect.left + margin && x <= ghost.rect.right() - margin
}
