//! Compliance balance lookup for a ship/year

use serde::{Deserialize, Serialize};

use fueleu_domain::model::Route;
use fueleu_domain::repository::{BankingRepository, RouteRepository};
use fueleu_domain::service::ComplianceCalculator;
use fueleu_domain::RegulatoryParams;

use super::{ServiceError, ServiceResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CbReport {
    pub ship_id: String,
    pub year: i32,
    pub cb_before: f64,
    pub applied: f64,
    pub cb_after: f64,
}

/// Balance after bank activity for the same ship/year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedCbReport {
    pub ship_id: String,
    pub year: i32,
    pub cb_before: f64,
    pub banked: f64,
    pub applied: f64,
    pub cb_after: f64,
}

pub struct ComplianceService<'a, R, B> {
    routes: &'a R,
    bank: &'a B,
    calculator: ComplianceCalculator,
}

impl<'a, R: RouteRepository, B: BankingRepository> ComplianceService<'a, R, B> {
    pub fn new(routes: &'a R, bank: &'a B, params: RegulatoryParams) -> Self {
        Self {
            routes,
            bank,
            calculator: ComplianceCalculator::new(params),
        }
    }

    pub fn compliance_balance(&self, ship_id: &str, year: i32) -> ServiceResult<CbReport> {
        let route = find_route(self.routes, ship_id, year)?;
        let cb = self.calculator.for_route(&route);
        tracing::debug!(ship_id, year, cb_t = cb.cb_t, "compliance balance computed");

        Ok(CbReport {
            ship_id: ship_id.to_string(),
            year,
            cb_before: cb.cb_t,
            applied: 0.0,
            cb_after: cb.cb_t,
        })
    }

    pub fn adjusted_balance(&self, ship_id: &str, year: i32) -> ServiceResult<AdjustedCbReport> {
        let route = find_route(self.routes, ship_id, year)?;
        let cb = self.calculator.for_route(&route);

        let entries = self.bank.find_entries(Some(ship_id), Some(year))?;
        let banked: f64 = entries.iter().filter(|e| e.is_deposit()).map(|e| e.amount_t).sum();
        let applied: f64 = entries
            .iter()
            .filter(|e| e.amount_t < 0.0)
            .map(|e| e.amount_t.abs())
            .sum();

        Ok(AdjustedCbReport {
            ship_id: ship_id.to_string(),
            year,
            cb_before: cb.cb_t,
            banked,
            applied,
            cb_after: cb.cb_t - banked + applied,
        })
    }
}

pub(crate) fn find_route<R: RouteRepository>(routes: &R, ship_id: &str, year: i32) -> ServiceResult<Route> {
    if ship_id.trim().is_empty() {
        return Err(ServiceError::InvalidInput("shipId required".to_string()));
    }
    routes
        .find_by_route_code(ship_id, year)?
        .ok_or_else(|| ServiceError::RouteNotFound(format!("{} ({})", ship_id, year)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fueleu_infra::persistence::{FileBankRepository, FileRouteRepository};
    use tempfile::tempdir;

    fn route(code: &str, intensity: f64, fuel: f64) -> Route {
        Route {
            id: 0,
            route_id: code.to_string(),
            vessel_type: "Container".to_string(),
            fuel_type: "HFO".to_string(),
            year: 2024,
            ghg_intensity: intensity,
            fuel_consumption_t: fuel,
            distance_km: 12000.0,
            total_emissions_t: 4500.0,
            is_baseline: false,
        }
    }

    #[test]
    fn test_cb_for_existing_route() {
        let dir = tempdir().unwrap();
        let routes = FileRouteRepository::open(dir.path().to_path_buf()).unwrap();
        let bank = FileBankRepository::open(dir.path().to_path_buf()).unwrap();
        routes.insert_all(vec![route("R001", 85.0, 100.0)]).unwrap();
        let service = ComplianceService::new(&routes, &bank, RegulatoryParams::default());

        let report = service.compliance_balance("R001", 2024).unwrap();
        assert!((report.cb_before - 17.78088).abs() < 1e-6);
        assert_eq!(report.cb_after, report.cb_before);
        assert_eq!(report.applied, 0.0);
    }

    #[test]
    fn test_cb_unknown_route_and_year() {
        let dir = tempdir().unwrap();
        let routes = FileRouteRepository::open(dir.path().to_path_buf()).unwrap();
        let bank = FileBankRepository::open(dir.path().to_path_buf()).unwrap();
        routes.insert_all(vec![route("R001", 85.0, 100.0)]).unwrap();
        let service = ComplianceService::new(&routes, &bank, RegulatoryParams::default());

        assert!(matches!(
            service.compliance_balance("R001", 2025),
            Err(ServiceError::RouteNotFound(_))
        ));
        assert!(matches!(
            service.compliance_balance("", 2024),
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_adjusted_balance_counts_bank_activity() {
        let dir = tempdir().unwrap();
        let routes = FileRouteRepository::open(dir.path().to_path_buf()).unwrap();
        let bank = FileBankRepository::open(dir.path().to_path_buf()).unwrap();
        routes.insert_all(vec![route("R001", 85.0, 100.0)]).unwrap();
        bank.insert_entry("R001", 2024, 5.0).unwrap();
        bank.insert_entry("R001", 2024, -2.0).unwrap();
        bank.insert_entry("R002", 2024, 9.0).unwrap();
        let service = ComplianceService::new(&routes, &bank, RegulatoryParams::default());

        let report = service.adjusted_balance("R001", 2024).unwrap();
        assert_eq!(report.banked, 5.0);
        assert_eq!(report.applied, 2.0);
        assert!((report.cb_after - (report.cb_before - 3.0)).abs() < 1e-9);
    }
}
