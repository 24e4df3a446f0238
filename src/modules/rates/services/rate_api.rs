use async_trait::async_trait;

use crate::core::Result;
use crate::modules::rates::models::RateTable;

/// Remote exchange-rate source.
///
/// The wire contract (request/response shape, authentication) belongs to the
/// concrete client; the engine only depends on this trait.
#[async_trait]
pub trait RateApi: Send + Sync {
    /// Fetch the latest full rate table for a base currency
    async fn latest(&self, base: &str) -> Result<RateTable>;

    /// Fetch the codes of all currencies the source can quote
    async fn symbols(&self) -> Result<Vec<String>>;

    /// Source name for logging
    fn name(&self) -> &str;
}
