use crate::core::rate;
use crate::modules::adjustments::models::{Adjustment, AdjustmentRate};

/// Computes the monetary effect of a tax or discount definition
pub struct AdjustmentEngine;

impl AdjustmentEngine {
    /// Apply an adjustment to a minor-unit base amount.
    ///
    /// Percentage adjustments scale with the base; fixed adjustments
    /// contribute their stored amount regardless of it. Inactive
    /// adjustments are computed like any other: a historical document
    /// keeps its arithmetic, and the caller checks `is_active()` when it
    /// wants to surface a warning.
    pub fn apply(adjustment: &Adjustment, base_minor: i64) -> i64 {
        match adjustment.rate {
            AdjustmentRate::Percentage(scaled) => rate::calculate_percentage(base_minor, scaled),
            AdjustmentRate::Fixed(amount_minor) => amount_minor,
        }
    }
}
