pub mod adjustments;
pub mod conversion;
pub mod documents;
pub mod rates;
