//! CSV loader for route data
//!
//! Expected header (snake_case or camelCase):
//! route_id,vessel_type,fuel_type,year,ghg_intensity,fuel_consumption_t,distance_km,total_emissions_t[,is_baseline]

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use fueleu_domain::model::Route;
use fueleu_types::{Error, Result};

#[derive(Debug, Deserialize)]
struct RouteRow {
    #[serde(alias = "routeId")]
    route_id: String,
    #[serde(alias = "vesselType")]
    vessel_type: String,
    #[serde(alias = "fuelType")]
    fuel_type: String,
    year: i32,
    #[serde(alias = "ghgIntensity")]
    ghg_intensity: f64,
    #[serde(alias = "fuelConsumptionT", alias = "fuel_consumption")]
    fuel_consumption_t: f64,
    #[serde(alias = "distanceKm", alias = "distance")]
    distance_km: f64,
    #[serde(alias = "totalEmissionsT", alias = "total_emissions")]
    total_emissions_t: f64,
    #[serde(default, alias = "isBaseline")]
    is_baseline: Option<bool>,
}

impl RouteRow {
    fn into_route(self, row: usize) -> Result<Route> {
        let route_id = self.route_id.trim().to_string();
        if route_id.is_empty() {
            return Err(Error::InvalidRecord {
                row,
                reason: "route_id is empty".to_string(),
            });
        }
        for (column, value) in [
            ("ghg_intensity", self.ghg_intensity),
            ("fuel_consumption_t", self.fuel_consumption_t),
            ("distance_km", self.distance_km),
            ("total_emissions_t", self.total_emissions_t),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidRecord {
                    row,
                    reason: format!("{} is not a finite number: {}", column, value),
                });
            }
        }
        Ok(Route {
            id: 0,
            route_id,
            vessel_type: self.vessel_type,
            fuel_type: self.fuel_type,
            year: self.year,
            ghg_intensity: self.ghg_intensity,
            fuel_consumption_t: self.fuel_consumption_t,
            distance_km: self.distance_km,
            total_emissions_t: self.total_emissions_t,
            is_baseline: self.is_baseline.unwrap_or(false),
        })
    }
}

/// Load routes from a CSV file. Returned routes carry id 0; the repository
/// assigns real ids on insert.
pub fn load_routes_from_csv(path: &Path) -> Result<Vec<Route>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let file = File::open(path)?;
    let routes = load_routes_from_reader(file)?;
    tracing::debug!(path = %path.display(), count = routes.len(), "loaded routes from CSV");
    Ok(routes)
}

pub fn load_routes_from_reader<R: Read>(reader: R) -> Result<Vec<Route>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut routes = Vec::new();
    for (row_idx, result) in reader.deserialize::<RouteRow>().enumerate() {
        let row_num = row_idx + 2; // header is row 1
        let row = result?;
        routes.push(row.into_route(row_num)?);
    }
    Ok(routes)
}
