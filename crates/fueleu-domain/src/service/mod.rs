//! Domain services

pub mod banking;
pub mod comparison;
pub mod compliance_balance;
pub mod pooling;

pub use banking::{apply_bank, bank_surplus, BankingError};
pub use comparison::{build_comparison, percent_diff, ComparisonBuilder};
pub use compliance_balance::{compute_cb, compute_cb_explicit, ComplianceCalculator};
pub use pooling::{allocate_pool, pool_totals};
