//! Derived compliance values. Computed per request, never persisted.

use serde::{Deserialize, Serialize};

/// Signed compliance balance. Positive is surplus, negative is deficit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceBalance {
    /// gCO2e
    pub cb_g: f64,
    /// tCO2e
    pub cb_t: f64,
}

impl ComplianceBalance {
    pub fn is_surplus(&self) -> bool {
        self.cb_t > 0.0
    }

    pub fn is_deficit(&self) -> bool {
        self.cb_t < 0.0
    }
}

/// Intensity comparison of one route against the baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub route_id: String,
    /// Baseline intensity (gCO2e/MJ)
    pub baseline: f64,
    /// Compared route intensity (gCO2e/MJ)
    pub comparison: f64,
    pub percent_diff: f64,
    pub compliant: bool,
}
