use serde::{Deserialize, Serialize};

/// Raw line-item input for a totals computation.
///
/// Numeric fields stay as strings because this feeds live form previews:
/// a half-typed value must degrade to zero for that field, not abort the
/// whole document. Line items are transient and recomputed on every edit,
/// never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Quantity, non-negative decimal as typed
    pub quantity: String,

    /// Price per unit as typed
    pub unit_price: String,

    /// References to tax adjustment definitions
    pub tax_ids: Vec<String>,

    /// References to discount adjustment definitions
    pub discount_ids: Vec<String>,
}

impl LineItemInput {
    pub fn new(quantity: &str, unit_price: &str) -> Self {
        Self {
            quantity: quantity.to_string(),
            unit_price: unit_price.to_string(),
            tax_ids: Vec::new(),
            discount_ids: Vec::new(),
        }
    }

    pub fn with_tax(mut self, adjustment_id: &str) -> Self {
        self.tax_ids.push(adjustment_id.to_string());
        self
    }

    pub fn with_discount(mut self, adjustment_id: &str) -> Self {
        self.discount_ids.push(adjustment_id.to_string());
        self
    }
}
