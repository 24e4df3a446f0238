pub mod services;

pub use services::CurrencyConverter;
