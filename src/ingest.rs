//! Entity Ingestor: payload validation and normalization.
//!
//! Turns the loosely-typed parser payload into a [`GeometrySet`] containing
//! only shapes the aggregator can measure. Malformed entries are dropped
//! rather than failing the whole ingestion, so one corrupt entity cannot
//! block measurement of the rest of the drawing. Every drop is collected in
//! an [`IngestReport`] for callers that want to inspect what was excluded.

use std::fmt;

use crate::geometry::{Circle, GeometrySet, Ring};
use crate::payload::GeometryPayload;
use crate::types::Point;

/// Why an entity was excluded during ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// Polyline entry had no vertex list at all
    MissingVertices,
    /// Polyline had fewer than 3 vertices and encloses no area
    TooFewVertices,
    /// Circle entry had no radius field
    MissingRadius,
    /// Circle radius was zero, negative, or not a finite number
    InvalidRadius,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVertices => write!(f, "missing vertices"),
            Self::TooFewVertices => write!(f, "fewer than 3 vertices"),
            Self::MissingRadius => write!(f, "missing radius"),
            Self::InvalidRadius => write!(f, "invalid radius"),
        }
    }
}

/// One entity excluded during ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedEntity {
    /// Why the entity was excluded
    pub reason: DropReason,
    /// Index of the entry within its payload collection
    pub index: usize,
}

impl fmt::Display for DroppedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            DropReason::MissingVertices | DropReason::TooFewVertices => {
                write!(f, "polyline #{}: {}", self.index, self.reason)
            }
            DropReason::MissingRadius | DropReason::InvalidRadius => {
                write!(f, "circle #{}: {}", self.index, self.reason)
            }
        }
    }
}

/// Collects the entities excluded during one ingestion.
///
/// Drops are reported as data, never logged or thrown; callers that do not
/// care may simply ignore the report.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    dropped: Vec<DroppedEntity>,
}

impl IngestReport {
    /// Create an empty report
    pub fn new() -> Self {
        IngestReport::default()
    }

    fn drop_entity(&mut self, reason: DropReason, index: usize) {
        self.dropped.push(DroppedEntity { reason, index });
    }

    /// Check if anything was dropped
    pub fn is_empty(&self) -> bool {
        self.dropped.is_empty()
    }

    /// Number of dropped entities
    pub fn len(&self) -> usize {
        self.dropped.len()
    }

    /// Iterate over all dropped entities
    pub fn iter(&self) -> std::slice::Iter<'_, DroppedEntity> {
        self.dropped.iter()
    }

    /// All drops with a specific reason
    pub fn of_reason(&self, reason: DropReason) -> Vec<&DroppedEntity> {
        self.dropped.iter().filter(|d| d.reason == reason).collect()
    }

    /// Check whether any drop with the given reason exists
    pub fn has_reason(&self, reason: DropReason) -> bool {
        self.dropped.iter().any(|d| d.reason == reason)
    }
}

impl<'a> IntoIterator for &'a IngestReport {
    type Item = &'a DroppedEntity;
    type IntoIter = std::slice::Iter<'a, DroppedEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.dropped.iter()
    }
}

/// Result of ingesting a payload.
#[derive(Debug, Clone)]
pub enum Ingestion {
    /// The parser offered no entities at all. A valid empty-result state,
    /// not an error.
    NoGeometry,
    /// Entities were offered; `set` holds the valid ones. The set may still
    /// be empty if every entry was malformed.
    Geometry {
        set: GeometrySet,
        report: IngestReport,
    },
}

/// Validate and normalize a parser payload.
///
/// Pure transformation: no side effects, no panics on malformed entries.
pub fn ingest(payload: &GeometryPayload) -> Ingestion {
    if payload.is_empty() {
        return Ingestion::NoGeometry;
    }

    let mut set = GeometrySet::new();
    let mut report = IngestReport::new();

    if let Some(polylines) = &payload.polylines {
        for (index, polyline) in polylines.iter().enumerate() {
            match &polyline.vertices {
                None => report.drop_entity(DropReason::MissingVertices, index),
                Some(vertices) if vertices.len() < 3 => {
                    report.drop_entity(DropReason::TooFewVertices, index)
                }
                Some(vertices) => {
                    let points = vertices.iter().map(|v| Point::new(v.x, v.y)).collect();
                    set.push_ring(Ring::new(points));
                }
            }
        }
    }

    if let Some(circles) = &payload.circles {
        for (index, circle) in circles.iter().enumerate() {
            match circle.radius {
                None => report.drop_entity(DropReason::MissingRadius, index),
                Some(r) if !r.is_finite() || r <= 0.0 => {
                    report.drop_entity(DropReason::InvalidRadius, index)
                }
                Some(r) => {
                    let center = circle
                        .center
                        .map_or(Point::ZERO, |c| Point::new(c.x, c.y));
                    set.push_circle(Circle::new(center, r));
                }
            }
        }
    }

    Ingestion::Geometry { set, report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::GeometryPayload;

    fn payload(json: &str) -> GeometryPayload {
        GeometryPayload::from_json(json).unwrap()
    }

    #[test]
    fn test_absent_payload_is_no_geometry() {
        assert!(matches!(ingest(&payload("{}")), Ingestion::NoGeometry));
    }

    #[test]
    fn test_empty_collections_are_no_geometry() {
        let p = payload(r#"{"polylines": [], "circles": []}"#);
        assert!(matches!(ingest(&p), Ingestion::NoGeometry));
    }

    #[test]
    fn test_valid_entities_are_kept() {
        let p = payload(
            r#"{"polylines": [{"vertices": [{"x":0,"y":0},{"x":4,"y":0},{"x":4,"y":3}]}],
                "circles": [{"radius": 2.0}]}"#,
        );
        match ingest(&p) {
            Ingestion::Geometry { set, report } => {
                assert_eq!(set.rings().len(), 1);
                assert_eq!(set.circles().len(), 1);
                assert!(report.is_empty());
            }
            Ingestion::NoGeometry => panic!("expected geometry"),
        }
    }

    #[test]
    fn test_short_polylines_are_dropped_silently() {
        let p = payload(
            r#"{"polylines": [
                {"vertices": [{"x":0,"y":0},{"x":1,"y":1}]},
                {"vertices": [{"x":0,"y":0},{"x":1,"y":0},{"x":1,"y":1}]},
                {}
            ]}"#,
        );
        match ingest(&p) {
            Ingestion::Geometry { set, report } => {
                assert_eq!(set.rings().len(), 1);
                assert_eq!(report.len(), 2);
                assert!(report.has_reason(DropReason::TooFewVertices));
                assert!(report.has_reason(DropReason::MissingVertices));
                assert_eq!(report.of_reason(DropReason::TooFewVertices)[0].index, 0);
            }
            Ingestion::NoGeometry => panic!("expected geometry"),
        }
    }

    #[test]
    fn test_invalid_circles_are_dropped_silently() {
        let p = payload(
            r#"{"circles": [
                {"radius": 0.0},
                {"radius": -2.5},
                {},
                {"radius": 1.0}
            ]}"#,
        );
        match ingest(&p) {
            Ingestion::Geometry { set, report } => {
                assert_eq!(set.circles().len(), 1);
                assert_eq!(set.circles()[0].radius, 1.0);
                assert_eq!(report.len(), 3);
                assert_eq!(report.of_reason(DropReason::InvalidRadius).len(), 2);
                assert!(report.has_reason(DropReason::MissingRadius));
            }
            Ingestion::NoGeometry => panic!("expected geometry"),
        }
    }

    #[test]
    fn test_all_invalid_is_empty_set_not_no_geometry() {
        // Entities were offered, so this is distinct from NoGeometry even
        // though nothing survived validation.
        let p = payload(r#"{"polylines": [{"vertices": []}]}"#);
        match ingest(&p) {
            Ingestion::Geometry { set, report } => {
                assert!(set.is_empty());
                assert_eq!(report.len(), 1);
            }
            Ingestion::NoGeometry => panic!("expected empty geometry, not NoGeometry"),
        }
    }

    #[test]
    fn test_circle_center_is_carried() {
        let p = payload(r#"{"circles": [{"center": {"x": 5.0, "y": 7.0}, "radius": 1.0}]}"#);
        match ingest(&p) {
            Ingestion::Geometry { set, .. } => {
                assert_eq!(set.circles()[0].center, Point::new(5.0, 7.0));
            }
            Ingestion::NoGeometry => panic!("expected geometry"),
        }
    }

    #[test]
    fn test_dropped_entity_display() {
        let d = DroppedEntity {
            reason: DropReason::TooFewVertices,
            index: 3,
        };
        assert_eq!(format!("{d}"), "polyline #3: fewer than 3 vertices");
    }
}
