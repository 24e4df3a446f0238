pub mod currency;
pub mod error;
pub mod money;
pub mod rate;

pub use currency::{Currency, CurrencyRegistry, NumberFormat};
pub use error::{AppError, Result};
pub use money::Money;
