//! Canonical geometry produced by ingestion.
//!
//! A [`GeometrySet`] holds only validated shapes: rings with at least 3
//! vertices and circles with a positive radius. It is created once per
//! extraction request, consumed by exactly one aggregation call, and
//! discarded.

pub mod circle;
pub mod ring;

pub use circle::Circle;
pub use ring::Ring;

/// The normalized collection of valid rings and circles.
///
/// Both collections preserve insertion order. Total area is a sum of
/// non-negative terms, so reordering cannot change the mathematical result,
/// but floating-point addition is not associative: bit-for-bit
/// reproducibility is only guaranteed for a fixed ordering.
///
/// All coordinates and radii are in drawing units, assumed to be meters.
#[derive(Debug, Clone, Default)]
pub struct GeometrySet {
    rings: Vec<Ring>,
    circles: Vec<Circle>,
}

impl GeometrySet {
    /// Create an empty set
    pub fn new() -> Self {
        GeometrySet::default()
    }

    /// Add a validated ring
    pub fn push_ring(&mut self, ring: Ring) {
        self.rings.push(ring);
    }

    /// Add a validated circle
    pub fn push_circle(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    /// Validated rings, in insertion order
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Validated circles, in insertion order
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// True when the set holds no shapes at all
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty() && self.circles.is_empty()
    }

    /// Total number of shapes
    pub fn entity_count(&self) -> usize {
        self.rings.len() + self.circles.len()
    }

    /// Total surface area in square meters: ring areas summed in insertion
    /// order, then circle areas.
    pub fn total_area(&self) -> f64 {
        let ring_area: f64 = self.rings.iter().map(Ring::area).sum();
        let circle_area: f64 = self.circles.iter().map(Circle::area).sum();
        ring_area + circle_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = GeometrySet::new();
        assert!(set.is_empty());
        assert_eq!(set.entity_count(), 0);
        assert_eq!(set.total_area(), 0.0);
    }

    #[test]
    fn test_total_area_sums_rings_and_circles() {
        let mut set = GeometrySet::new();
        set.push_ring(Ring::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]));
        set.push_circle(Circle::from_radius(1.0));

        let expected = 12.0 + std::f64::consts::PI;
        assert!((set.total_area() - expected).abs() < 1e-10);
        assert_eq!(set.entity_count(), 2);
    }

    #[test]
    fn test_total_area_is_additive() {
        let ring_a = Ring::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let ring_b = Ring::from_coords(&[(10.0, 0.0), (12.0, 0.0), (12.0, 2.0), (10.0, 2.0)]);

        let mut both = GeometrySet::new();
        both.push_ring(ring_a.clone());
        both.push_ring(ring_b.clone());

        let mut only_a = GeometrySet::new();
        only_a.push_ring(ring_a);
        let mut only_b = GeometrySet::new();
        only_b.push_ring(ring_b);

        let sum = only_a.total_area() + only_b.total_area();
        assert!((both.total_area() - sum).abs() < 1e-10);
    }
}
