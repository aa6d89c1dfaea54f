use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One banking ledger line for a ship/year.
///
/// Positive amounts bank surplus, negative amounts apply it to a deficit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankEntry {
    pub id: u64,
    pub ship_id: String,
    pub year: i32,
    pub amount_t: f64,
    pub created_at: DateTime<Utc>,
}

impl BankEntry {
    pub fn is_deposit(&self) -> bool {
        self.amount_t > 0.0
    }
}
