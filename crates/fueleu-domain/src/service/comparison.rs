//! Baseline comparison

use crate::constants::{RegulatoryParams, REGULATORY_CEILING};
use crate::model::{Comparison, RouteIntensity};

/// Percent difference of `comparison` relative to `baseline`.
///
/// A zero baseline yields NaN or an infinity.
pub fn percent_diff(baseline: f64, comparison: f64) -> f64 {
    ((comparison / baseline) - 1.0) * 100.0
}

pub fn build_comparison(baseline: &RouteIntensity, other: &RouteIntensity) -> Comparison {
    build_comparison_with_ceiling(baseline, other, REGULATORY_CEILING)
}

fn build_comparison_with_ceiling(
    baseline: &RouteIntensity,
    other: &RouteIntensity,
    ceiling: f64,
) -> Comparison {
    Comparison {
        route_id: other.route_id.clone(),
        baseline: baseline.intensity,
        comparison: other.intensity,
        percent_diff: percent_diff(baseline.intensity, other.intensity),
        compliant: other.intensity <= ceiling,
    }
}

/// Comparison builder bound to a compliance ceiling
#[derive(Debug, Clone, Copy)]
pub struct ComparisonBuilder {
    ceiling: f64,
}

impl Default for ComparisonBuilder {
    fn default() -> Self {
        Self::new(RegulatoryParams::default())
    }
}

impl ComparisonBuilder {
    pub fn new(params: RegulatoryParams) -> Self {
        Self {
            ceiling: params.compliance_ceiling,
        }
    }

    pub fn build(&self, baseline: &RouteIntensity, other: &RouteIntensity) -> Comparison {
        build_comparison_with_ceiling(baseline, other, self.ceiling)
    }
}
