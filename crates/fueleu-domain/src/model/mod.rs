//! Domain model types

pub mod bank;
pub mod compliance;
pub mod pool;
pub mod route;

pub use bank::BankEntry;
pub use compliance::{ComplianceBalance, Comparison};
pub use pool::{AllocatedMember, PoolMember, PoolRecord, PoolTotals};
pub use route::{Route, RouteIntensity};
