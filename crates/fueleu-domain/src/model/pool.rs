use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pool allocation input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolMember {
    pub ship_id: String,
    pub cb_before: f64,
}

impl PoolMember {
    pub fn new(ship_id: impl Into<String>, cb_before: f64) -> Self {
        Self {
            ship_id: ship_id.into(),
            cb_before,
        }
    }
}

/// Pool allocation output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocatedMember {
    pub ship_id: String,
    pub cb_before: f64,
    pub cb_after: f64,
}

/// Aggregate view of one allocation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolTotals {
    pub cb_before: f64,
    pub cb_after: f64,
    /// Deficit the pool's surplus could not cover. Not reflected in any member.
    pub uncovered_deficit: f64,
}

/// A persisted pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolRecord {
    pub pool_id: u64,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub members: Vec<AllocatedMember>,
}
