//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod file_bank_repo;
mod file_pool_repo;
mod file_route_repo;
mod json_document;

pub use file_bank_repo::FileBankRepository;
pub use file_pool_repo::FilePoolRepository;
pub use file_route_repo::FileRouteRepository;
