// Cached exchange-rate lookups.
//
// Failure semantics: a missing live rate is an Option::None, never an error.
// Documents record a rate snapshot at save time; the live rate only feeds
// optional UI hints, so a dead remote source must not block anything. The
// cache is read-mostly and eventually consistent; staleness within the TTL
// is accepted.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::RateProviderConfig;
use crate::modules::rates::models::RateTable;

use super::rate_api::RateApi;

/// Rate tables expire after a day
pub const RATE_CACHE_TTL_SECS: i64 = 24 * 60 * 60;

/// The supported-currency universe changes rarely; keep it for a month
pub const SYMBOLS_CACHE_TTL_SECS: i64 = 30 * 24 * 60 * 60;

struct SymbolsCache {
    codes: Vec<String>,
    fetched_at: DateTime<Utc>,
}

pub struct ExchangeRateService {
    api: Arc<dyn RateApi>,
    config: RateProviderConfig,

    // base currency -> most recent table, possibly stale
    tables: RwLock<HashMap<String, RateTable>>,
    symbols: RwLock<Option<SymbolsCache>>,

    // per-base refresh gates so concurrent misses converge on one fetch
    inflight: tokio::sync::Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
    symbols_inflight: tokio::sync::Mutex<()>,
}

impl ExchangeRateService {
    pub fn new(api: Arc<dyn RateApi>, config: RateProviderConfig) -> Self {
        Self {
            api,
            config,
            tables: RwLock::new(HashMap::new()),
            symbols: RwLock::new(None),
            inflight: tokio::sync::Mutex::new(HashMap::new()),
            symbols_inflight: tokio::sync::Mutex::new(()),
        }
    }

    /// Live lookups require an API credential and a non-demo deployment
    pub fn is_enabled(&self) -> bool {
        !self.config.api_key.is_empty() && !self.config.demo_mode
    }

    /// Warm-start the cache from a persisted snapshot, e.g. the last table
    /// written before a restart.
    pub fn prime(&self, table: RateTable) {
        if let Ok(mut tables) = self.tables.write() {
            tables.insert(table.base.clone(), table);
        }
    }

    /// Rate for a currency pair, served from cache when fresh.
    ///
    /// `Some(1)` for an identical pair. `None` means "conversion
    /// unavailable": the source is disabled or unreachable and nothing
    /// usable is cached, or the target is not quoted. Callers must not read
    /// `None` as zero.
    pub async fn cached_exchange_rate(&self, base: &str, target: &str) -> Option<Decimal> {
        if base == target {
            return Some(Decimal::ONE);
        }

        if !self.is_enabled() {
            debug!("Exchange rate source disabled, no live rate for {}/{}", base, target);
            return None;
        }

        if let Some(result) = self.fresh_lookup(base, target) {
            return result;
        }

        // Single-flight: take the per-base gate, then re-check the cache in
        // case another task already refreshed it.
        let gate = self.refresh_gate(base).await;
        let _guard = gate.lock().await;

        if let Some(result) = self.fresh_lookup(base, target) {
            return result;
        }

        match self.api.latest(base).await {
            Ok(table) => {
                info!(
                    "Refreshed {} rates for base {} from {}",
                    table.rates.len(),
                    base,
                    self.api.name()
                );
                let rate = table.rate_for(target);
                if rate.is_none() {
                    warn!("Currency {} not quoted by {}", target, self.api.name());
                }
                if let Ok(mut tables) = self.tables.write() {
                    tables.insert(base.to_string(), table);
                }
                rate
            }
            Err(err) => {
                warn!(
                    "Rate refresh for base {} failed, degrading to cached data: {}",
                    base, err
                );
                self.stale_lookup(base, target)
            }
        }
    }

    /// Codes the remote source can quote, cached for a month
    pub async fn supported_currencies(&self) -> Option<Vec<String>> {
        if !self.is_enabled() {
            return None;
        }

        if let Some(codes) = self.fresh_symbols() {
            return Some(codes);
        }

        let _guard = self.symbols_inflight.lock().await;

        if let Some(codes) = self.fresh_symbols() {
            return Some(codes);
        }

        match self.api.symbols().await {
            Ok(codes) => {
                if let Ok(mut cache) = self.symbols.write() {
                    *cache = Some(SymbolsCache {
                        codes: codes.clone(),
                        fetched_at: Utc::now(),
                    });
                }
                Some(codes)
            }
            Err(err) => {
                warn!("Supported-currency refresh failed, degrading to cached data: {}", err);
                self.symbols
                    .read()
                    .ok()
                    .and_then(|cache| cache.as_ref().map(|c| c.codes.clone()))
            }
        }
    }

    /// `Some(result)` when a fresh table exists; the inner value is the
    /// pair's rate or `None` for an unsupported target.
    fn fresh_lookup(&self, base: &str, target: &str) -> Option<Option<Decimal>> {
        let tables = self.tables.read().ok()?;
        let table = tables.get(base)?;

        if table.age_seconds(Utc::now()) < RATE_CACHE_TTL_SECS {
            Some(table.rate_for(target))
        } else {
            None
        }
    }

    fn stale_lookup(&self, base: &str, target: &str) -> Option<Decimal> {
        let tables = self.tables.read().ok()?;
        tables.get(base).and_then(|table| table.rate_for(target))
    }

    fn fresh_symbols(&self) -> Option<Vec<String>> {
        let cache = self.symbols.read().ok()?;
        let symbols = cache.as_ref()?;

        if (Utc::now() - symbols.fetched_at).num_seconds() < SYMBOLS_CACHE_TTL_SECS {
            Some(symbols.codes.clone())
        } else {
            None
        }
    }

    async fn refresh_gate(&self, base: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut inflight = self.inflight.lock().await;
        inflight
            .entry(base.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }
}
