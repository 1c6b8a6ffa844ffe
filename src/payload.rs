//! Loosely-typed geometry payload from the drawing parser.
//!
//! The external DXF parser hands over extracted entities as a JSON-shaped
//! structure in which every collection and field may be absent. This module
//! models that shape faithfully with explicit optionality; validation happens
//! once, in [`crate::ingest`], rather than ad hoc inside the area algorithm.
//!
//! The parser also emits entity kinds the engine does not measure (layers,
//! lines, arcs, text); unknown fields are ignored during deserialization so
//! those never break ingestion.

use serde::Deserialize;

use crate::error::Result;

/// A single vertex as the parser emits it
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct VertexPayload {
    pub x: f64,
    pub y: f64,
}

/// One extracted polyline, possibly malformed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolylinePayload {
    /// Vertex list; may be missing entirely
    #[serde(default)]
    pub vertices: Option<Vec<VertexPayload>>,
}

/// One extracted circle, possibly malformed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CirclePayload {
    /// Center point; carried by the parser but unused for area
    #[serde(default)]
    pub center: Option<VertexPayload>,
    /// Radius in drawing units; may be missing
    #[serde(default)]
    pub radius: Option<f64>,
}

/// The full extraction payload for one drawing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeometryPayload {
    /// Extracted polylines; absent when the drawing has none
    #[serde(default)]
    pub polylines: Option<Vec<PolylinePayload>>,

    /// Extracted circles; absent when the drawing has none
    #[serde(default)]
    pub circles: Option<Vec<CirclePayload>>,
}

impl GeometryPayload {
    /// Parse a payload from JSON text as produced by the drawing parser.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// True when the parser offered no entities at all: both collections
    /// absent or empty. This is the `NoGeometry` condition, distinct from a
    /// payload whose entries all turn out to be invalid.
    pub fn is_empty(&self) -> bool {
        let no_polylines = self.polylines.as_ref().map_or(true, |p| p.is_empty());
        let no_circles = self.circles.as_ref().map_or(true, |c| c.is_empty());
        no_polylines && no_circles
    }

    /// Polyline entries offered, valid or not
    pub fn polyline_count(&self) -> usize {
        self.polylines.as_ref().map_or(0, |p| p.len())
    }

    /// Circle entries offered, valid or not
    pub fn circle_count(&self) -> usize {
        self.circles.as_ref().map_or(0, |c| c.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_empty() {
        let p = GeometryPayload::from_json("{}").unwrap();
        assert!(p.is_empty());
        assert_eq!(p.polyline_count(), 0);
        assert_eq!(p.circle_count(), 0);
    }

    #[test]
    fn test_empty_collections_are_empty() {
        let p = GeometryPayload::from_json(r#"{"polylines": [], "circles": []}"#).unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn test_missing_fields_deserialize() {
        // Entries with missing vertices/radius still parse; validation is
        // the ingestor's job.
        let p = GeometryPayload::from_json(
            r#"{"polylines": [{}], "circles": [{"center": {"x": 1.0, "y": 2.0}}]}"#,
        )
        .unwrap();
        assert!(!p.is_empty());
        assert_eq!(p.polyline_count(), 1);
        assert_eq!(p.circle_count(), 1);
        assert!(p.polylines.as_ref().unwrap()[0].vertices.is_none());
        assert!(p.circles.as_ref().unwrap()[0].radius.is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let p = GeometryPayload::from_json(
            r#"{"polylines": [{"vertices": [{"x": 0, "y": 0}], "layer": "WALLS"}],
                "circles": [{"radius": 2.5}],
                "lines": [], "texts": ["FLOOR 1"]}"#,
        )
        .unwrap();
        assert_eq!(p.polyline_count(), 1);
        assert_eq!(p.circles.as_ref().unwrap()[0].radius, Some(2.5));
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(GeometryPayload::from_json("not json").is_err());
    }
}
