use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Full rate table for one base currency, as returned by the remote source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    /// Base currency code all rates are quoted against
    pub base: String,

    /// Target currency code -> units of target per one unit of base
    pub rates: HashMap<String, Decimal>,

    /// When the table was obtained; drives cache expiry
    pub fetched_at: DateTime<Utc>,
}

impl RateTable {
    pub fn new(base: &str, rates: HashMap<String, Decimal>) -> Self {
        Self {
            base: base.to_string(),
            rates,
            fetched_at: Utc::now(),
        }
    }

    pub fn rate_for(&self, target: &str) -> Option<Decimal> {
        self.rates.get(target).copied()
    }

    pub fn age_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.fetched_at).num_seconds()
    }
}
