//! Pool creation and listing

use serde::{Deserialize, Serialize};

use fueleu_domain::model::{PoolMember, PoolRecord, PoolTotals};
use fueleu_domain::repository::PoolingRepository;
use fueleu_domain::service::{allocate_pool, pool_totals};

use super::{ServiceError, ServiceResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolReport {
    pub pool: PoolRecord,
    pub totals: PoolTotals,
}

pub struct PoolingService<'a, P> {
    pools: &'a P,
}

impl<'a, P: PoolingRepository> PoolingService<'a, P> {
    pub fn new(pools: &'a P) -> Self {
        Self { pools }
    }

    pub fn create_pool(&self, year: i32, members: &[PoolMember]) -> ServiceResult<PoolReport> {
        if members.is_empty() {
            return Err(ServiceError::EmptyPool);
        }
        if let Some(pos) = members.iter().position(|m| m.ship_id.trim().is_empty()) {
            return Err(ServiceError::InvalidInput(format!(
                "member {} has an empty shipId",
                pos + 1
            )));
        }
        if let Some(m) = members.iter().find(|m| !m.cb_before.is_finite()) {
            return Err(ServiceError::InvalidInput(format!(
                "member {} has a non-finite cbBefore: {}",
                m.ship_id, m.cb_before
            )));
        }

        let allocated = allocate_pool(members);
        let totals = pool_totals(&allocated);
        if totals.uncovered_deficit > 0.0 {
            tracing::warn!(
                year,
                uncovered = totals.uncovered_deficit,
                "pool deficit exceeds surplus, remainder is not carried"
            );
        }

        let pool = self.pools.create_pool(year, &allocated)?;
        tracing::info!(
            pool_id = pool.pool_id,
            year,
            members = allocated.len(),
            cb_before = totals.cb_before,
            cb_after = totals.cb_after,
            "pool created"
        );

        Ok(PoolReport { pool, totals })
    }

    pub fn list_pools(&self, year: Option<i32>) -> ServiceResult<Vec<PoolReport>> {
        Ok(self
            .pools
            .find_all(year)?
            .into_iter()
            .map(|pool| {
                let totals = pool_totals(&pool.members);
                PoolReport { pool, totals }
            })
            .collect())
    }
}
