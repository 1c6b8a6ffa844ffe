//! Ring: a polyline treated as a closed polygon

use crate::types::Point;

/// A polyline treated as a closed polygon for area purposes.
///
/// The vertex sequence is implicitly closed: the last vertex wraps around to
/// the first, whether or not the parser emitted an explicit closing vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    vertices: Vec<Point>,
}

impl Ring {
    /// Create a ring from a vertex sequence
    pub fn new(vertices: Vec<Point>) -> Self {
        Ring { vertices }
    }

    /// Create a ring from coordinate pairs
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Ring::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    /// Vertices of the ring
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Area of the ring via the shoelace formula.
    ///
    /// The absolute value of the signed area is returned, so the result is
    /// independent of winding order. Rings with fewer than 3 vertices have
    /// zero area. Self-intersecting rings are not detected; the formula still
    /// yields a deterministic number, which may not match the visually
    /// intended surface.
    pub fn area(&self) -> f64 {
        let verts = &self.vertices;
        if verts.len() < 3 {
            return 0.0;
        }

        let mut area = 0.0;
        for i in 0..verts.len() {
            let j = (i + 1) % verts.len();
            area += verts[i].x * verts[j].y;
            area -= verts[j].x * verts[i].y;
        }

        (area / 2.0).abs()
    }

    /// Perimeter of the implicitly closed ring
    pub fn perimeter(&self) -> f64 {
        let verts = &self.vertices;
        if verts.len() < 2 {
            return 0.0;
        }

        let mut length = 0.0;
        for i in 0..verts.len() {
            let j = (i + 1) % verts.len();
            length += verts[i].distance(&verts[j]);
        }
        length
    }
}
