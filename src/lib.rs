//! # floorcalc
//!
//! A pure Rust library for aggregating floor surface areas from geometry
//! extracted out of CAD drawing files.
//!
//! An external DXF parser extracts closed polylines and circles from a
//! drawing; this crate turns that loosely-typed payload into a single surface
//! measurement, applies an optional minimum-area threshold, and reports a
//! pass/fail result with a display-ready diagnostic.
//!
//! ## Features
//!
//! - Polygon areas via the shoelace formula, independent of vertex winding
//! - Circle areas from extracted radii
//! - Tolerant ingestion: malformed entities are dropped and reported, never
//!   abort the whole computation
//! - A distinct "no geometry" outcome, so callers can tell "nothing to
//!   measure" apart from "measured and got zero"
//!
//! ## Quick Start
//!
//! ```rust
//! use floorcalc::{measure_json, SurfaceOutcome, ThresholdPolicy};
//!
//! let payload = r#"{
//!     "polylines": [{"vertices": [
//!         {"x": 0.0, "y": 0.0}, {"x": 4.0, "y": 0.0},
//!         {"x": 4.0, "y": 3.0}, {"x": 0.0, "y": 3.0}
//!     ]}]
//! }"#;
//!
//! let (outcome, report) = measure_json(payload, &ThresholdPolicy::at_least(10.0), None)?;
//! assert!(report.is_empty());
//! match outcome {
//!     SurfaceOutcome::Computed(result) => {
//!         assert!((result.total_area - 12.0).abs() < 1e-10);
//!         assert!(result.meets_threshold);
//!     }
//!     SurfaceOutcome::NoData(reason) => println!("{reason}"),
//! }
//! # Ok::<(), floorcalc::SurfaceError>(())
//! ```
//!
//! ## Units
//!
//! Drawing units are assumed to be meters and all areas are reported in
//! square meters. The parser payload carries no unit metadata, so no
//! conversion or inference is attempted.
//!
//! ## Limitations
//!
//! Self-intersecting and duplicate-vertex polygons are not detected; the
//! shoelace formula is applied as-is and yields a deterministic number that
//! may not match the visually intended surface.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod aggregate;
pub mod error;
pub mod geometry;
pub mod ingest;
pub mod payload;
pub mod types;

// Re-export commonly used types
pub use aggregate::{
    aggregate, AggregationResult, NoDataReason, SurfaceOutcome, ThresholdPolicy,
};
pub use error::{Result, SurfaceError};
pub use geometry::{Circle, GeometrySet, Ring};
pub use ingest::{ingest, DropReason, DroppedEntity, IngestReport, Ingestion};
pub use payload::{CirclePayload, GeometryPayload, PolylinePayload, VertexPayload};
pub use types::Point;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the full pipeline on an already-deserialized payload: ingest, then
/// aggregate under the given policy.
///
/// Returns the outcome together with the ingestion report of dropped
/// entities (empty when nothing was dropped or no geometry was supplied).
pub fn measure(
    payload: &GeometryPayload,
    policy: &ThresholdPolicy,
    label: Option<&str>,
) -> (SurfaceOutcome, IngestReport) {
    let ingestion = ingest(payload);
    let outcome = aggregate(&ingestion, policy, label);
    let report = match ingestion {
        Ingestion::Geometry { report, .. } => report,
        Ingestion::NoGeometry => IngestReport::new(),
    };
    (outcome, report)
}

/// Run the full pipeline on raw JSON text from the drawing parser.
pub fn measure_json(
    text: &str,
    policy: &ThresholdPolicy,
    label: Option<&str>,
) -> Result<(SurfaceOutcome, IngestReport)> {
    let payload = GeometryPayload::from_json(text)?;
    Ok(measure(&payload, policy, label))
}
