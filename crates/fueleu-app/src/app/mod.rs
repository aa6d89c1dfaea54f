//! Use cases behind the dashboard commands
//!
//! Each service borrows the repositories it needs and owns the calculators
//! built from the configured regulatory parameters.

pub mod banking_service;
pub mod compliance_service;
pub mod pooling_service;
pub mod route_service;

pub use banking_service::{ApplyReport, AvailableReport, BankReport, BankingService};
pub use compliance_service::{AdjustedCbReport, CbReport, ComplianceService};
pub use pooling_service::{PoolReport, PoolingService};
pub use route_service::{ComparisonReport, RouteService};

use fueleu_domain::service::BankingError;
use fueleu_types::Error;
use thiserror::Error;

/// Errors surfaced by the use cases
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("No baseline set")]
    NoBaseline,

    #[error("No surplus to bank (cb_before: {cb_before:.3} t)")]
    NoSurplus { cb_before: f64 },

    #[error("No deficit (cb_before: {cb_before:.3} t)")]
    NoDeficit { cb_before: f64 },

    #[error("No banked surplus (cb_before: {cb_before:.3} t)")]
    NoBankedSurplus { cb_before: f64 },

    #[error("Pool needs at least one member")]
    EmptyPool,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Banking rule violated: {0}")]
    Banking(#[from] BankingError),

    #[error(transparent)]
    Storage(#[from] Error),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
