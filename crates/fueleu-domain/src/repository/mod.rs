//! Repository trait definitions for data persistence

use crate::model::{AllocatedMember, BankEntry, PoolRecord, Route};
use fueleu_types::Error;

/// Repository for registered routes
pub trait RouteRepository {
    /// All routes ordered by id
    fn find_all(&self) -> Result<Vec<Route>, Error>;

    fn find_by_id(&self, id: u64) -> Result<Option<Route>, Error>;

    /// Find a route by its route code and year
    fn find_by_route_code(&self, route_id: &str, year: i32) -> Result<Option<Route>, Error>;

    fn find_baseline(&self) -> Result<Option<Route>, Error>;

    /// Make `id` the only baseline route. Returns false if no such route exists.
    fn set_baseline(&self, id: u64) -> Result<bool, Error>;

    /// Add routes, assigning fresh ids. Returns the stored routes.
    fn insert_all(&self, routes: Vec<Route>) -> Result<Vec<Route>, Error>;
}

/// Repository for bank entries
pub trait BankingRepository {
    fn insert_entry(&self, ship_id: &str, year: i32, amount_t: f64) -> Result<BankEntry, Error>;

    /// Entries newest first, optionally filtered by ship and/or year
    fn find_entries(&self, ship_id: Option<&str>, year: Option<i32>) -> Result<Vec<BankEntry>, Error>;

    /// Sum of entry amounts for a ship/year
    fn available(&self, ship_id: &str, year: i32) -> Result<f64, Error>;
}

/// Repository for pools
pub trait PoolingRepository {
    /// Persist a pool and its members in one write
    fn create_pool(&self, year: i32, members: &[AllocatedMember]) -> Result<PoolRecord, Error>;

    fn find_all(&self, year: Option<i32>) -> Result<Vec<PoolRecord>, Error>;
}
