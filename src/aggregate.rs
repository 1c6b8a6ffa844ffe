//! Surface Aggregator: total area computation and threshold evaluation.

use std::fmt;

use crate::ingest::Ingestion;

/// Label used in diagnostics when the caller supplies none.
const DEFAULT_LABEL: &str = "floor";

/// Minimum acceptable total area, in square meters.
///
/// The threshold only drives the pass/fail flag; it never alters the
/// computed area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdPolicy {
    min_area: Option<f64>,
}

impl ThresholdPolicy {
    /// No minimum: every computed area passes, including zero.
    pub fn none() -> Self {
        ThresholdPolicy { min_area: None }
    }

    /// Require at least `min_area` square meters.
    pub fn at_least(min_area: f64) -> Self {
        ThresholdPolicy {
            min_area: Some(min_area),
        }
    }

    /// Build a policy from raw caller input. NaN and negative values are
    /// treated as "no threshold", matching how the original form input was
    /// parsed.
    pub fn from_input(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() && v >= 0.0 => ThresholdPolicy::at_least(v),
            _ => ThresholdPolicy::none(),
        }
    }

    /// The configured minimum, if any
    pub fn min_area(&self) -> Option<f64> {
        self.min_area
    }
}

/// The result of one surface aggregation.
///
/// Produced fresh per call and never mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    /// Total surface area in square meters
    pub total_area: f64,
    /// Whether the total satisfies the threshold policy
    pub meets_threshold: bool,
    /// Display-ready description of the threshold evaluation; `None` when no
    /// threshold was configured
    pub diagnostic: Option<String>,
}

/// Why no area could be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoDataReason {
    /// The parser offered no polylines and no circles
    NotSupplied,
    /// Entities were offered but every one was malformed and dropped
    AllEntitiesDropped,
}

impl fmt::Display for NoDataReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupplied => write!(f, "no extracted geometry available for computation"),
            Self::AllEntitiesDropped => {
                write!(f, "no valid geometry remained after validation")
            }
        }
    }
}

/// Outcome of an aggregation call.
///
/// `NoData` is a first-class state, not an error: it lets callers distinguish
/// "nothing to measure" from "measured and got zero".
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOutcome {
    /// No area was computed
    NoData(NoDataReason),
    /// An area was computed and evaluated against the threshold
    Computed(AggregationResult),
}

impl SurfaceOutcome {
    /// The aggregation result, if an area was computed
    pub fn computed(&self) -> Option<&AggregationResult> {
        match self {
            Self::Computed(result) => Some(result),
            Self::NoData(_) => None,
        }
    }

    /// Shorthand for `computed().map(|r| r.total_area)`
    pub fn total_area(&self) -> Option<f64> {
        self.computed().map(|r| r.total_area)
    }
}

/// Compute the total area of an ingestion and evaluate it against a
/// threshold policy.
///
/// `label` names the measured floor in diagnostics only; it does not affect
/// computation. The threshold comparison uses full precision; the two-decimal
/// rounding in diagnostics is display-only.
///
/// Pure and stateless: repeated calls over the same input yield the same
/// outcome.
pub fn aggregate(
    ingestion: &Ingestion,
    policy: &ThresholdPolicy,
    label: Option<&str>,
) -> SurfaceOutcome {
    let set = match ingestion {
        Ingestion::NoGeometry => return SurfaceOutcome::NoData(NoDataReason::NotSupplied),
        Ingestion::Geometry { set, .. } if set.is_empty() => {
            return SurfaceOutcome::NoData(NoDataReason::AllEntitiesDropped)
        }
        Ingestion::Geometry { set, .. } => set,
    };

    let total_area = set.total_area();
    let label = label.unwrap_or(DEFAULT_LABEL);

    let (meets_threshold, diagnostic) = match policy.min_area() {
        None => (true, None),
        Some(threshold) if total_area < threshold => {
            let msg = format!(
                "Surface for {label} ({total_area:.2} m²) is below the threshold ({threshold:.2} m²)"
            );
            (false, Some(msg))
        }
        Some(threshold) => {
            let msg = format!(
                "Surface for {label} ({total_area:.2} m²) meets the threshold ({threshold:.2} m²)"
            );
            (true, Some(msg))
        }
    };

    SurfaceOutcome::Computed(AggregationResult {
        total_area,
        meets_threshold,
        diagnostic,
    })
}
