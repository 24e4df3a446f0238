//! Monetary computation engine for multi-currency invoicing documents.
//!
//! Represents money in integer minor units, converts between currencies via
//! stored rate snapshots, applies percentage and fixed adjustments (taxes
//! and discounts), and aggregates line items into document totals that
//! reconcile to the cent.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::adjustments;
pub use modules::conversion;
pub use modules::documents;
pub use modules::rates;
