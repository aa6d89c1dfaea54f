//! File-based implementation of PoolingRepository

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use chrono::Utc;

use fueleu_domain::model::{AllocatedMember, PoolRecord};
use fueleu_domain::repository::PoolingRepository;
use fueleu_types::{Error, Result};

use super::json_document;

/// Stores pools with their members in `pools.json` under the store directory.
pub struct FilePoolRepository {
    store_path: PathBuf,
    pools: RefCell<Vec<PoolRecord>>,
}

impl FilePoolRepository {
    /// Create or load a pool repository
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("pools.json");
        let pools = json_document::load(&store_path)?;

        Ok(Self {
            store_path,
            pools: RefCell::new(pools),
        })
    }

    fn persist(&self) -> Result<()> {
        json_document::persist(&self.store_path, &*self.pools.borrow())
    }
}

impl PoolingRepository for FilePoolRepository {
    fn create_pool(&self, year: i32, members: &[AllocatedMember]) -> std::result::Result<PoolRecord, Error> {
        let mut pools = self.pools.borrow_mut();
        let record = PoolRecord {
            pool_id: pools.iter().map(|p| p.pool_id).max().unwrap_or(0) + 1,
            year,
            created_at: Utc::now(),
            members: members.to_vec(),
        };
        pools.push(record.clone());
        drop(pools);
        self.persist()?;
        Ok(record)
    }

    fn find_all(&self, year: Option<i32>) -> std::result::Result<Vec<PoolRecord>, Error> {
        Ok(self
            .pools
            .borrow()
            .iter()
            .filter(|p| year.map_or(true, |y| p.year == y))
            .cloned()
            .collect())
    }
}
