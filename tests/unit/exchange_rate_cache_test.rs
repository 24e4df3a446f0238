// Exchange-rate cache behavior: TTLs, single-flight refresh, and the
// null-on-failure contract.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ledgercalc::config::RateProviderConfig;
use ledgercalc::core::{AppError, Result};
use ledgercalc::rates::{ExchangeRateService, RateApi, RateTable};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn enabled_config() -> RateProviderConfig {
    RateProviderConfig {
        api_key: "test_key".to_string(),
        base_url: "http://localhost".to_string(),
        demo_mode: false,
    }
}

fn usd_table() -> HashMap<String, Decimal> {
    let mut rates = HashMap::new();
    rates.insert("EUR".to_string(), dec!(0.92));
    rates.insert("JPY".to_string(), dec!(148.5));
    rates
}

/// Scripted rate source: counts fetches, optionally fails or stalls
struct MockRateApi {
    fetch_count: AtomicUsize,
    fail: bool,
    latency: Option<Duration>,
}

impl MockRateApi {
    fn new() -> Self {
        Self {
            fetch_count: AtomicUsize::new(0),
            fail: false,
            latency: None,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    fn slow(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::new()
        }
    }

    fn fetches(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateApi for MockRateApi {
    async fn latest(&self, base: &str) -> Result<RateTable> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if self.fail {
            return Err(AppError::rate_source("remote source unreachable"));
        }

        Ok(RateTable::new(base, usd_table()))
    }

    async fn symbols(&self) -> Result<Vec<String>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(AppError::rate_source("remote source unreachable"));
        }

        Ok(vec!["EUR".to_string(), "JPY".to_string(), "USD".to_string()])
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[tokio::test]
async fn identity_pair_never_hits_the_source() {
    let api = Arc::new(MockRateApi::new());
    let service = ExchangeRateService::new(api.clone(), enabled_config());

    assert_eq!(
        service.cached_exchange_rate("USD", "USD").await,
        Some(Decimal::ONE)
    );
    assert_eq!(api.fetches(), 0);
}

#[tokio::test]
async fn disabled_without_credentials() {
    let api = Arc::new(MockRateApi::new());
    let service = ExchangeRateService::new(api.clone(), RateProviderConfig::disabled());

    assert!(!service.is_enabled());
    assert_eq!(service.cached_exchange_rate("USD", "EUR").await, None);
    assert_eq!(api.fetches(), 0);
}

#[tokio::test]
async fn disabled_in_demo_environments() {
    let api = Arc::new(MockRateApi::new());
    let config = RateProviderConfig {
        demo_mode: true,
        ..enabled_config()
    };
    let service = ExchangeRateService::new(api.clone(), config);

    assert!(!service.is_enabled());
    assert_eq!(service.cached_exchange_rate("USD", "EUR").await, None);
    assert_eq!(api.fetches(), 0);
}

#[tokio::test]
async fn second_lookup_is_served_from_cache() {
    init_tracing();
    let api = Arc::new(MockRateApi::new());
    let service = ExchangeRateService::new(api.clone(), enabled_config());

    assert_eq!(
        service.cached_exchange_rate("USD", "EUR").await,
        Some(dec!(0.92))
    );
    assert_eq!(
        service.cached_exchange_rate("USD", "JPY").await,
        Some(dec!(148.5))
    );
    assert_eq!(api.fetches(), 1);
}

#[tokio::test]
async fn unsupported_target_is_none_not_zero() {
    let api = Arc::new(MockRateApi::new());
    let service = ExchangeRateService::new(api.clone(), enabled_config());

    assert_eq!(service.cached_exchange_rate("USD", "XAU").await, None);
    // the fetched table is still cached for other targets
    assert_eq!(
        service.cached_exchange_rate("USD", "EUR").await,
        Some(dec!(0.92))
    );
    assert_eq!(api.fetches(), 1);
}

#[tokio::test]
async fn failure_degrades_to_none_with_an_empty_cache() {
    let api = Arc::new(MockRateApi::failing());
    let service = ExchangeRateService::new(api.clone(), enabled_config());

    assert_eq!(service.cached_exchange_rate("USD", "EUR").await, None);
    assert_eq!(api.fetches(), 1);
}

#[tokio::test]
async fn failure_degrades_to_stale_cached_data() {
    let api = Arc::new(MockRateApi::failing());
    let service = ExchangeRateService::new(api.clone(), enabled_config());

    // warm-start with a table well past its TTL
    let mut stale = RateTable::new("USD", usd_table());
    stale.fetched_at = Utc::now() - chrono::Duration::days(2);
    service.prime(stale);

    // refresh fails, stale data is better than nothing
    assert_eq!(
        service.cached_exchange_rate("USD", "EUR").await,
        Some(dec!(0.92))
    );
    assert_eq!(api.fetches(), 1);
}

#[tokio::test]
async fn concurrent_misses_converge_on_one_fetch() {
    let api = Arc::new(MockRateApi::slow(Duration::from_millis(50)));
    let service = ExchangeRateService::new(api.clone(), enabled_config());

    let (a, b) = tokio::join!(
        service.cached_exchange_rate("USD", "EUR"),
        service.cached_exchange_rate("USD", "JPY")
    );

    assert_eq!(a, Some(dec!(0.92)));
    assert_eq!(b, Some(dec!(148.5)));
    assert_eq!(api.fetches(), 1);
}

#[tokio::test]
async fn supported_currencies_are_cached() {
    let api = Arc::new(MockRateApi::new());
    let service = ExchangeRateService::new(api.clone(), enabled_config());

    let first = service.supported_currencies().await.unwrap();
    let second = service.supported_currencies().await.unwrap();

    assert_eq!(first, second);
    assert!(first.contains(&"EUR".to_string()));
    assert_eq!(api.fetches(), 1);
}

#[tokio::test]
async fn supported_currencies_none_on_failure() {
    let api = Arc::new(MockRateApi::failing());
    let service = ExchangeRateService::new(api.clone(), enabled_config());

    assert_eq!(service.supported_currencies().await, None);
}
