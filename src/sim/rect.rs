//! Axis-aligned rectangles in playfield space
//!
//! Playfield space has its origin at the top-left corner, x grows right and
//! y grows down (screen convention), all values in pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle of the given size centred on a point
    pub fn centered_at(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }

    /// Whether `x` lies within the horizontal span (edges included)
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.left && x <= self.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 60.0, 40.0);
        assert_eq!(r.right(), 70.0);
        assert_eq!(r.center_x(), 40.0);
        assert_eq!(r.center_y(), 40.0);
    }

    #[test]
    fn test_spans_x_is_inclusive() {
        let r = Rect::new(10.0, 0.0, 60.0, 40.0);
        assert!(r.spans_x(10.0));
        assert!(r.spans_x(70.0));
        assert!(!r.spans_x(9.99));
        assert!(!r.spans_x(70.01));
    }

    #[test]
    fn test_centered_at() {
        let r = Rect::centered_at(Vec2::new(100.0, 50.0), 6.0, 16.0);
        assert_eq!(r.left, 97.0);
        assert_eq!(r.top, 42.0);
        assert_eq!(r.center_x(), 100.0);
    }
}
