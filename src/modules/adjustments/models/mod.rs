pub mod adjustment;

pub use adjustment::{Adjustment, AdjustmentCategory, AdjustmentRate, AdjustmentStatus};
