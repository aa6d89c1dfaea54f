//! Repository adapters for persistence layer

use std::path::PathBuf;

use fueleu_infra::persistence::{FileBankRepository, FilePoolRepository, FileRouteRepository};
use fueleu_types::Result;

use crate::config::Config;

/// Open file-based route repository
pub fn open_route_repo(config: &Config) -> Result<FileRouteRepository> {
    open_route_repo_at(config.store_dir()?)
}

/// Open file-based bank repository
pub fn open_bank_repo(config: &Config) -> Result<FileBankRepository> {
    open_bank_repo_at(config.store_dir()?)
}

/// Open file-based pool repository
pub fn open_pool_repo(config: &Config) -> Result<FilePoolRepository> {
    open_pool_repo_at(config.store_dir()?)
}

pub fn open_route_repo_at(store_dir: PathBuf) -> Result<FileRouteRepository> {
    FileRouteRepository::open(store_dir)
}

pub fn open_bank_repo_at(store_dir: PathBuf) -> Result<FileBankRepository> {
    FileBankRepository::open(store_dir)
}

pub fn open_pool_repo_at(store_dir: PathBuf) -> Result<FilePoolRepository> {
    FilePoolRepository::open(store_dir)
}
