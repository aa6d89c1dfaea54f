use serde::{Deserialize, Serialize};

/// A registered shipping route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: u64,
    /// Route code, also used as the ship id
    pub route_id: String,
    pub vessel_type: String,
    pub fuel_type: String,
    pub year: i32,
    /// gCO2e/MJ
    pub ghg_intensity: f64,
    /// Tonnes of fuel
    pub fuel_consumption_t: f64,
    pub distance_km: f64,
    /// tCO2e
    pub total_emissions_t: f64,
    #[serde(default)]
    pub is_baseline: bool,
}

/// Intensity record handed to the comparison builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteIntensity {
    pub route_id: String,
    pub intensity: f64,
}

impl From<&Route> for RouteIntensity {
    fn from(route: &Route) -> Self {
        Self {
            route_id: route.route_id.clone(),
            intensity: route.ghg_intensity,
        }
    }
}
