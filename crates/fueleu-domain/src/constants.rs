//! Regulatory constants
//!
//! The target intensity drives the compliance balance; the ceiling drives the
//! pass/fail verdict of a route comparison. They are numerically equal in the
//! 2025 reporting period but are separate parameters and must stay separate.

use serde::{Deserialize, Serialize};

/// Target GHG intensity in gCO2e/MJ (2% below the 91.16 reference value)
pub const TARGET_INTENSITY: f64 = 89.3368;

/// Energy content of one tonne of fuel in MJ
pub const MJ_PER_TON: f64 = 41_000.0;

/// Absolute intensity ceiling (gCO2e/MJ) a route must not exceed to be compliant
pub const REGULATORY_CEILING: f64 = 89.3368;

/// Grams per tonne, for gCO2e -> tCO2e
pub const GRAMS_PER_TONNE: f64 = 1_000_000.0;

/// Regulatory parameters injected into the calculators.
///
/// Read once at startup and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryParams {
    /// Target intensity for compliance balance (gCO2e/MJ)
    #[serde(default = "default_target_intensity")]
    pub target_intensity: f64,

    /// MJ per tonne of fuel
    #[serde(default = "default_mj_per_ton")]
    pub mj_per_ton: f64,

    /// Compliance ceiling for comparisons (gCO2e/MJ)
    #[serde(default = "default_compliance_ceiling")]
    pub compliance_ceiling: f64,
}

fn default_target_intensity() -> f64 {
    TARGET_INTENSITY
}

fn default_mj_per_ton() -> f64 {
    MJ_PER_TON
}

fn default_compliance_ceiling() -> f64 {
    REGULATORY_CEILING
}

impl Default for RegulatoryParams {
    fn default() -> Self {
        Self {
            target_intensity: TARGET_INTENSITY,
            mj_per_ton: MJ_PER_TON,
            compliance_ceiling: REGULATORY_CEILING,
        }
    }
}

impl std::fmt::Display for RegulatoryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Target intensity:   {} gCO2e/MJ", self.target_intensity)?;
        writeln!(f, "Energy content:     {} MJ/t", self.mj_per_ton)?;
        write!(f, "Compliance ceiling: {} gCO2e/MJ", self.compliance_ceiling)
    }
}
