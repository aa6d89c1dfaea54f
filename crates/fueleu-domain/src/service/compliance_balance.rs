//! Compliance balance calculation
//!
//! CB = (target - actual) x energy, energy = fuel x MJ_PER_TON.
//! Inputs are not validated: NaN, infinities and negative values flow
//! straight through the arithmetic.

use crate::constants::{RegulatoryParams, GRAMS_PER_TONNE, MJ_PER_TON};
use crate::model::{ComplianceBalance, Route};

/// Compute CB with the standard energy content
pub fn compute_cb(target: f64, actual: f64, fuel_tonnes: f64) -> ComplianceBalance {
    compute_cb_explicit(target, actual, fuel_tonnes, MJ_PER_TON)
}

pub fn compute_cb_explicit(
    target: f64,
    actual: f64,
    fuel_tonnes: f64,
    mj_per_ton: f64,
) -> ComplianceBalance {
    let energy_mj = fuel_tonnes * mj_per_ton;
    let cb_g = (target - actual) * energy_mj;
    ComplianceBalance {
        cb_g,
        cb_t: cb_g / GRAMS_PER_TONNE,
    }
}

/// Calculator bound to a set of regulatory parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplianceCalculator {
    params: RegulatoryParams,
}

impl ComplianceCalculator {
    pub fn new(params: RegulatoryParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RegulatoryParams {
        &self.params
    }

    /// CB for an actual intensity and fuel mass against the configured target
    pub fn compute(&self, actual: f64, fuel_tonnes: f64) -> ComplianceBalance {
        compute_cb_explicit(
            self.params.target_intensity,
            actual,
            fuel_tonnes,
            self.params.mj_per_ton,
        )
    }

    pub fn for_route(&self, route: &Route) -> ComplianceBalance {
        self.compute(route.ghg_intensity, route.fuel_consumption_t)
    }
}
