pub mod models;
pub mod services;

pub use models::RateTable;
pub use services::{ExchangeRateHostApi, ExchangeRateService, RateApi};
