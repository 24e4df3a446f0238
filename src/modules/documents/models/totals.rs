use serde::{Deserialize, Serialize};

use crate::core::Money;

/// Computed document totals, all in the document's currency.
///
/// Transient output: the surrounding application writes the final numbers
/// onto its own document record; nothing here is persisted directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTotals {
    pub subtotal: Money,
    pub tax_total: Money,
    pub discount_total: Money,

    /// subtotal + tax - discount; negative values are credits, not errors
    pub grand_total: Money,

    /// grand total minus the amount already paid; negative on overpayment
    pub amount_due: Money,

    /// Whether a document-level discount was in effect for this computation
    pub per_document_discount: bool,

    /// Human-readable note disclosing the exchange rate used to restate the
    /// grand total in the tenant default currency; present only when the
    /// document currency differs from it
    pub conversion_note: Option<String>,
}

impl DocumentTotals {
    pub fn has_adjustments(&self) -> bool {
        self.tax_total.amount() != 0 || self.discount_total.amount() != 0
    }
}
