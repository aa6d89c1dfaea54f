//! Domain layer for the FuelEU compliance dashboard
//!
//! Holds the pure compliance arithmetic (balance, comparison, pooling,
//! banking rules), the domain model, and the repository traits that the
//! infrastructure layer implements.

pub mod constants;
pub mod model;
pub mod repository;
pub mod service;

pub use constants::RegulatoryParams;
