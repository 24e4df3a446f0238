use serde::{Deserialize, Serialize};

use super::line_item::LineItemInput;

/// Whether a discount applies to each line individually or once to the
/// document subtotal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountMethod {
    PerLineItem,
    PerDocument,
}

/// How a document-level discount is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountComputation {
    Percentage,
    Fixed,
}

/// Document-level discount definition, used only with
/// `DiscountMethod::PerDocument`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDiscount {
    pub computation: DiscountComputation,

    /// Percentage number ("10" = 10%) or a money amount, as typed.
    /// Blank or invalid input counts as zero.
    pub rate: String,
}

/// Everything a totals computation needs, supplied per call.
///
/// The computation is pure over this input plus the injected lookups:
/// identical input yields byte-identical totals, so the same call backs
/// live previews and final persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentInput {
    /// Document currency; `None` or an unknown code falls back to the
    /// tenant default
    pub currency_code: Option<String>,

    pub discount_method: DiscountMethod,

    pub line_items: Vec<LineItemInput>,

    pub document_discount: Option<DocumentDiscount>,

    /// Amount already paid, as typed; blank counts as zero
    pub amount_paid: String,
}

impl DocumentInput {
    pub fn new(currency_code: Option<&str>, line_items: Vec<LineItemInput>) -> Self {
        Self {
            currency_code: currency_code.map(str::to_string),
            discount_method: DiscountMethod::PerLineItem,
            line_items,
            document_discount: None,
            amount_paid: String::new(),
        }
    }

    pub fn with_document_discount(mut self, discount: DocumentDiscount) -> Self {
        self.discount_method = DiscountMethod::PerDocument;
        self.document_discount = Some(discount);
        self
    }

    pub fn with_amount_paid(mut self, amount_paid: &str) -> Self {
        self.amount_paid = amount_paid.to_string();
        self
    }
}
