// Tax and discount definitions.
//
// An adjustment is a persisted entity maintained by the surrounding CRUD
// flows; the engine only reads it. Percentage rates are stored in scaled
// fixed-point form, fixed rates as minor units, so the computation kind is
// a tagged variant with an exhaustive match downstream.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{rate, Result};

/// What kind of amount an adjustment represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentCategory {
    Tax,
    Discount,
}

/// Lifecycle status. Inactive adjustments stay computable so historical
/// documents keep their arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentStatus {
    Active,
    Inactive,
}

/// How an adjustment computes its monetary effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum AdjustmentRate {
    /// Scaled percentage applied to a minor-unit base
    Percentage(i64),

    /// Flat minor-unit amount, independent of the base
    Fixed(i64),
}

/// A tax or discount definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Unique adjustment ID (UUID)
    pub id: String,

    /// Display name, e.g. "VAT 21%"
    pub name: String,

    pub category: AdjustmentCategory,

    pub rate: AdjustmentRate,

    pub status: AdjustmentStatus,
}

impl Adjustment {
    /// Create a percentage adjustment from a ratio (0.025 = 2.5%).
    ///
    /// Fails with `InvalidRate` for a negative ratio.
    pub fn percentage(name: &str, category: AdjustmentCategory, ratio: Decimal) -> Result<Self> {
        let scaled = rate::decimal_to_scaled_rate(ratio)?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            category,
            rate: AdjustmentRate::Percentage(scaled),
            status: AdjustmentStatus::Active,
        })
    }

    /// Create a fixed adjustment from a minor-unit amount
    pub fn fixed(name: &str, category: AdjustmentCategory, amount_minor: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            category,
            rate: AdjustmentRate::Fixed(amount_minor),
            status: AdjustmentStatus::Active,
        }
    }

    pub fn deactivated(mut self) -> Self {
        self.status = AdjustmentStatus::Inactive;
        self
    }

    /// False for adjustments retired by the surrounding CRUD flows. The
    /// engine still computes these; the caller decides whether to warn.
    pub fn is_active(&self) -> bool {
        self.status == AdjustmentStatus::Active
    }
}
