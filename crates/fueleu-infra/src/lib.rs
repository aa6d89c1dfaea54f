//! Infrastructure layer for fueleu-dashboard

pub mod persistence;
pub mod regulation_loader;
pub mod routes_csv;
