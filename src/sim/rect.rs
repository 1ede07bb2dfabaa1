//! Axis-aligned rectangle geometry
//!
//! Every entity in the game is a rectangle positioned by its center. Overlap
//! and containment use strict inequalities, so rectangles that merely share an
//! edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with a display color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Center position
    pub pos: Vec2,
    /// Full width and height (both positive)
    pub dims: Vec2,
    /// Fill color (RGBA)
    pub color: [f32; 4],
}

impl Rect {
    pub fn new(pos: Vec2, dims: Vec2, color: [f32; 4]) -> Self {
        debug_assert!(dims.x > 0.0 && dims.y > 0.0, "rect dimensions must be positive");
        Self { pos, dims, color }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.dims.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.dims.y / 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.dims.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.dims.x / 2.0
    }

    /// Top-left corner, for drawing
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.left(), self.top())
    }

    /// True if the two rectangles overlap on both axes
    pub fn collides_with(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True if `point` lies strictly inside all four edges
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.left() < point.x
            && self.right() > point.x
            && self.top() < point.y
            && self.bottom() > point.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h), [1.0; 4])
    }

    #[test]
    fn test_edges() {
        let r = rect(100.0, 50.0, 40.0, 20.0);
        assert_eq!(r.left(), 80.0);
        assert_eq!(r.right(), 120.0);
        assert_eq!(r.top(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.min(), Vec2::new(80.0, 40.0));
    }

    #[test]
    fn test_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(8.0, 8.0, 10.0, 10.0);
        assert!(a.collides_with(&b));
    }

    #[test]
    fn test_edge_touching_is_not_collision() {
        // a.right == b.left
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 0.0, 10.0, 10.0);
        assert!(!a.collides_with(&b));
        assert!(!b.collides_with(&a));

        // a.bottom == c.top
        let c = rect(0.0, 10.0, 10.0, 10.0);
        assert!(!a.collides_with(&c));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(3.0, 50.0, 10.0, 10.0);
        assert!(!a.collides_with(&b));
    }

    #[test]
    fn test_contains_point_strict() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Vec2::new(4.9, -4.9)));
        assert!(!r.contains_point(Vec2::new(5.0, 0.0)));
        assert!(!r.contains_point(Vec2::new(0.0, -5.0)));
        assert!(!r.contains_point(Vec2::new(20.0, 0.0)));
    }

    proptest! {
        #[test]
        fn collision_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = rect(bx, by, bw, bh);
            prop_assert_eq!(a.collides_with(&b), b.collides_with(&a));
        }

        #[test]
        fn rect_overlaps_itself_and_contains_center(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..200.0, h in 1.0f32..200.0,
        ) {
            let r = rect(x, y, w, h);
            prop_assert!(r.collides_with(&r));
            prop_assert!(r.contains_point(r.pos));
        }
    }
}
