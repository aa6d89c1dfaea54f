//! Route listing, baseline selection, comparison and import

use std::path::Path;

use serde::{Deserialize, Serialize};

use fueleu_domain::model::{Comparison, Route, RouteIntensity};
use fueleu_domain::repository::RouteRepository;
use fueleu_domain::service::ComparisonBuilder;
use fueleu_domain::RegulatoryParams;
use fueleu_infra::routes_csv::load_routes_from_csv;

use super::{ServiceError, ServiceResult};

/// Baseline plus one comparison per other route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub baseline: Route,
    pub comparisons: Vec<Comparison>,
}

pub struct RouteService<'a, R> {
    routes: &'a R,
    builder: ComparisonBuilder,
}

impl<'a, R: RouteRepository> RouteService<'a, R> {
    pub fn new(routes: &'a R, params: RegulatoryParams) -> Self {
        Self {
            routes,
            builder: ComparisonBuilder::new(params),
        }
    }

    pub fn list_routes(&self) -> ServiceResult<Vec<Route>> {
        Ok(self.routes.find_all()?)
    }

    pub fn set_baseline(&self, id: u64) -> ServiceResult<Route> {
        if !self.routes.set_baseline(id)? {
            return Err(ServiceError::RouteNotFound(format!("id {}", id)));
        }
        let route = self
            .routes
            .find_by_id(id)?
            .ok_or_else(|| ServiceError::RouteNotFound(format!("id {}", id)))?;
        tracing::info!(id, route_id = %route.route_id, "baseline set");
        Ok(route)
    }

    pub fn comparison(&self) -> ServiceResult<ComparisonReport> {
        let baseline = self.routes.find_baseline()?.ok_or(ServiceError::NoBaseline)?;
        let base = RouteIntensity::from(&baseline);
        if base.intensity == 0.0 {
            tracing::warn!(route_id = %baseline.route_id, "baseline intensity is zero, percent differences are not finite");
        }

        let comparisons = self
            .routes
            .find_all()?
            .iter()
            .filter(|r| r.id != baseline.id)
            .map(|r| self.builder.build(&base, &RouteIntensity::from(r)))
            .collect();

        Ok(ComparisonReport {
            baseline,
            comparisons,
        })
    }

    /// Import routes from CSV. Returns the stored routes with their new ids.
    pub fn import_routes(&self, csv_path: &Path) -> ServiceResult<Vec<Route>> {
        let routes = load_routes_from_csv(csv_path)?;
        let stored = self.routes.insert_all(routes)?;
        tracing::info!(path = %csv_path.display(), count = stored.len(), "routes imported");
        Ok(stored)
    }
}
