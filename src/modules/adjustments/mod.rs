pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Adjustment, AdjustmentCategory, AdjustmentRate, AdjustmentStatus};
pub use repositories::{AdjustmentLookup, InMemoryAdjustments};
pub use services::AdjustmentEngine;
