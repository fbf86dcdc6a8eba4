//! Screen-space geometry for hit testing.
//!
//! Coordinates are client (viewport) pixels as delivered by pointer and touch
//! events, so they are plain `f64` values with the origin at the top-left.

use serde::{Deserialize, Serialize};

/// A point in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding rectangle in client coordinates.
///
/// Mirrors the shape of a DOM `getBoundingClientRect()` result: the four edges
/// are stored directly instead of origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds a rectangle from its top-left corner and size.
    #[must_use]
    pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Returns `true` when `point` lies inside the rectangle.
    ///
    /// All four edges are inclusive: a press exactly on `left`, `top`,
    /// `right` or `bottom` counts as inside.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        !(point.x < self.left
            || point.x > self.right
            || point.y < self.top
            || point.y > self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Rect {
        Rect::from_origin_size(10.0, 20.0, 100.0, 50.0)
    }

    #[test]
    fn interior_point_is_inside() {
        assert!(card().contains(Point::new(50.0, 40.0)));
    }

    #[test]
    fn every_edge_is_inclusive() {
        let r = card();
        assert!(r.contains(Point::new(r.left, 40.0)));
        assert!(r.contains(Point::new(r.right, 40.0)));
        assert!(r.contains(Point::new(50.0, r.top)));
        assert!(r.contains(Point::new(50.0, r.bottom)));
        assert!(r.contains(Point::new(r.right, r.bottom)));
    }

    #[test]
    fn points_just_past_an_edge_are_outside() {
        let r = card();
        assert!(!r.contains(Point::new(r.left - 0.5, 40.0)));
        assert!(!r.contains(Point::new(r.right + 0.5, 40.0)));
        assert!(!r.contains(Point::new(50.0, r.top - 0.5)));
        assert!(!r.contains(Point::new(50.0, r.bottom + 0.5)));
    }

    #[test]
    fn size_accessors() {
        let r = card();
        assert!((r.width() - 100.0).abs() < f64::EPSILON);
        assert!((r.height() - 50.0).abs() < f64::EPSILON);
    }
}
