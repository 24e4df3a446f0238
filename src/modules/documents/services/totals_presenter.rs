use serde::{Deserialize, Serialize};

use crate::modules::documents::models::DocumentTotals;

/// Display-ready totals for previews and printed documents.
///
/// Suppressed rows are `None`, meaning "absent", not "zero".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsDisplay {
    pub subtotal: Option<String>,
    pub tax_total: Option<String>,
    pub discount_total: Option<String>,
    pub grand_total: String,
    pub amount_due: String,
    pub conversion_note: Option<String>,
}

/// Rendering layer over computed totals.
///
/// Row suppression is a presentation convenience, kept apart from the
/// arithmetic: a document with no tax, no discount and no document-level
/// discount in effect shows only its grand total and amount due.
pub struct TotalsPresenter;

impl TotalsPresenter {
    pub fn present(totals: &DocumentTotals) -> TotalsDisplay {
        let suppress_breakdown = !totals.has_adjustments() && !totals.per_document_discount;

        let row = |money: &crate::core::Money| {
            if suppress_breakdown {
                None
            } else {
                Some(money.format())
            }
        };

        TotalsDisplay {
            subtotal: row(&totals.subtotal),
            tax_total: row(&totals.tax_total),
            discount_total: row(&totals.discount_total),
            grand_total: totals.grand_total.format(),
            amount_due: totals.amount_due.format(),
            conversion_note: totals.conversion_note.clone(),
        }
    }
}
