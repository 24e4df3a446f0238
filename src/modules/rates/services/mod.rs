pub mod exchange_host;
pub mod rate_api;
pub mod rate_service;

pub use exchange_host::ExchangeRateHostApi;
pub use rate_api::RateApi;
pub use rate_service::{ExchangeRateService, RATE_CACHE_TTL_SECS, SYMBOLS_CACHE_TTL_SECS};
