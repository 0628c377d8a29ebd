//! Projectile vs target hit detection
//!
//! A projectile moving at 200 px per loop unit can travel further in one frame
//! than the target is tall, so a plain rectangle overlap test would let it
//! tunnel through. Instead we test whether the projectile's centre line
//! crossed the target's centre line between the previous and current tick,
//! while its centre x is inside the target's span.

use glam::Vec2;

use super::projectile::Projectile;
use super::rect::Rect;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Impact point: projectile centre x, target centre y
    pub point: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
        }
    }
}

/// Centre x inside the target's horizontal span (edges count)
#[inline]
pub fn horizontal_overlap(projectile: &Rect, target: &Rect) -> bool {
    target.spans_x(projectile.center_x())
}

/// Moving up (decreasing y), the centre went from strictly below the line to
/// on or above it
#[inline]
pub fn crossed_line(prev_center_y: f32, curr_center_y: f32, line_y: f32) -> bool {
    prev_center_y > line_y && curr_center_y <= line_y
}

/// Check a projectile against the target after both have moved this tick
pub fn projectile_target_collision(projectile: &Projectile, target: &Rect) -> CollisionResult {
    let line_y = target.center_y();

    if horizontal_overlap(&projectile.rect, target)
        && crossed_line(projectile.prev_center_y(), projectile.rect.center_y(), line_y)
    {
        return CollisionResult {
            hit: true,
            point: Vec2::new(projectile.rect.center_x(), line_y),
        };
    }

    CollisionResult::miss()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Rect {
        // Centre line at y = 120, span x in [100, 160]
        Rect::new(100.0, 100.0, 60.0, 40.0)
    }

    fn projectile(center_x: f32, prev_center_y: f32, center_y: f32) -> Projectile {
        let rect = Rect::centered_at(Vec2::new(center_x, center_y), 6.0, 16.0);
        Projectile {
            rect,
            prev_top: prev_center_y - 8.0,
            speed: 200.0,
        }
    }

    #[test]
    fn test_crossing_inside_span_hits() {
        let result = projectile_target_collision(&projectile(130.0, 200.0, 100.0), &target());
        assert!(result.hit);
        assert_eq!(result.point, Vec2::new(130.0, 120.0));
    }

    #[test]
    fn test_fast_projectile_does_not_tunnel() {
        // Jumps from well below to well above the target in a single tick
        let result = projectile_target_collision(&projectile(130.0, 400.0, -20.0), &target());
        assert!(result.hit);
    }

    #[test]
    fn test_landing_exactly_on_line_hits() {
        assert!(projectile_target_collision(&projectile(130.0, 121.0, 120.0), &target()).hit);
    }

    #[test]
    fn test_starting_on_line_does_not_hit() {
        // Previous centre must be strictly below the line
        assert!(!projectile_target_collision(&projectile(130.0, 120.0, 110.0), &target()).hit);
    }

    #[test]
    fn test_stationary_projectile_does_not_hit() {
        // No equality shortcut: a projectile that has not moved never hits
        assert!(!projectile_target_collision(&projectile(130.0, 110.0, 110.0), &target()).hit);
    }

    #[test]
    fn test_not_yet_reached_line() {
        assert!(!projectile_target_collision(&projectile(130.0, 200.0, 150.0), &target()).hit);
    }

    #[test]
    fn test_already_past_line() {
        assert!(!projectile_target_collision(&projectile(130.0, 110.0, 50.0), &target()).hit);
    }

    #[test]
    fn test_span_edges_are_inclusive() {
        assert!(projectile_target_collision(&projectile(100.0, 200.0, 100.0), &target()).hit);
        assert!(projectile_target_collision(&projectile(160.0, 200.0, 100.0), &target()).hit);
        assert!(!projectile_target_collision(&projectile(99.9, 200.0, 100.0), &target()).hit);
        assert!(!projectile_target_collision(&projectile(160.1, 200.0, 100.0), &target()).hit);
    }
}
