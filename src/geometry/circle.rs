//! Circle shape extracted from a drawing

use crate::types::Point;

/// A circle with a center and radius.
///
/// The ingestor only admits circles with a finite, positive radius; the
/// aggregator may assume `radius > 0`. The center is carried through from the
/// parser but does not participate in area computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center point of the circle
    pub center: Point,
    /// Radius of the circle
    pub radius: f64,
}

impl Circle {
    /// Create a new circle with center and radius
    pub fn new(center: Point, radius: f64) -> Self {
        Circle { center, radius }
    }

    /// Create a new circle at the origin
    pub fn from_radius(radius: f64) -> Self {
        Circle::new(Point::ZERO, radius)
    }

    /// Get the diameter of the circle
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    /// Get the circumference of the circle
    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }

    /// Get the area of the circle
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}
