//! Banking use cases: deposit surplus, apply it to a deficit, inspect the ledger

use serde::{Deserialize, Serialize};

use fueleu_domain::model::BankEntry;
use fueleu_domain::repository::{BankingRepository, RouteRepository};
use fueleu_domain::service::{apply_bank, bank_surplus, ComplianceCalculator};
use fueleu_domain::RegulatoryParams;

use super::compliance_service::find_route;
use super::{ServiceError, ServiceResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankReport {
    pub ship_id: String,
    pub year: i32,
    pub entry: BankEntry,
    pub cb_before: f64,
    pub cb_after: f64,
    pub banked: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyReport {
    pub ship_id: String,
    pub year: i32,
    pub entry: BankEntry,
    pub cb_before: f64,
    pub applied: f64,
    pub cb_after: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableReport {
    pub ship_id: String,
    pub year: i32,
    pub available_t: f64,
}

pub struct BankingService<'a, R, B> {
    routes: &'a R,
    bank: &'a B,
    calculator: ComplianceCalculator,
}

impl<'a, R: RouteRepository, B: BankingRepository> BankingService<'a, R, B> {
    pub fn new(routes: &'a R, bank: &'a B, params: RegulatoryParams) -> Self {
        Self {
            routes,
            bank,
            calculator: ComplianceCalculator::new(params),
        }
    }

    pub fn records(&self, ship_id: Option<&str>, year: Option<i32>) -> ServiceResult<Vec<BankEntry>> {
        let ship_id = ship_id.filter(|s| !s.trim().is_empty());
        Ok(self.bank.find_entries(ship_id, year)?)
    }

    pub fn available(&self, ship_id: &str, year: i32) -> ServiceResult<AvailableReport> {
        if ship_id.trim().is_empty() {
            return Err(ServiceError::InvalidInput("shipId required".to_string()));
        }
        Ok(AvailableReport {
            ship_id: ship_id.to_string(),
            year,
            available_t: self.bank.available(ship_id, year)?,
        })
    }

    /// Bank surplus for a ship/year. Without an explicit amount the whole
    /// unbanked balance is banked.
    ///
    /// `cb_before` is the route's balance net of the ledger, so surplus that
    /// is already banked cannot be banked again.
    pub fn bank(&self, ship_id: &str, year: i32, amount_t: Option<f64>) -> ServiceResult<BankReport> {
        let route = find_route(self.routes, ship_id, year)?;
        let net_banked = self.bank.available(ship_id, year)?;
        let cb_before = self.calculator.for_route(&route).cb_t - net_banked;

        if cb_before <= 0.0 && amount_t.is_none() {
            return Err(ServiceError::NoSurplus { cb_before });
        }
        let amount = amount_t.unwrap_or(cb_before.max(0.0));
        bank_surplus(cb_before, amount)?;

        let entry = self.bank.insert_entry(ship_id, year, amount)?;
        tracing::info!(ship_id, year, banked = amount, cb_before, "surplus banked");

        Ok(BankReport {
            ship_id: ship_id.to_string(),
            year,
            entry,
            cb_before,
            cb_after: cb_before - amount,
            banked: amount,
        })
    }

    /// Cover as much of a deficit as the banked balance allows
    pub fn apply(&self, ship_id: &str, year: i32) -> ServiceResult<ApplyReport> {
        let route = find_route(self.routes, ship_id, year)?;
        let cb_before = self.calculator.for_route(&route).cb_t;

        if cb_before >= 0.0 {
            return Err(ServiceError::NoDeficit { cb_before });
        }
        let available = self.bank.available(ship_id, year)?;
        if available <= 0.0 {
            return Err(ServiceError::NoBankedSurplus { cb_before });
        }

        let applied = cb_before.abs().min(available);
        apply_bank(available, applied)?;

        let entry = self.bank.insert_entry(ship_id, year, -applied)?;
        tracing::info!(ship_id, year, applied, cb_before, "banked surplus applied");

        Ok(ApplyReport {
            ship_id: ship_id.to_string(),
            year,
            entry,
            cb_before,
            applied,
            cb_after: cb_before + applied,
        })
    }
}
