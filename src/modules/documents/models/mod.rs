pub mod document;
pub mod line_item;
pub mod totals;

pub use document::{DiscountComputation, DiscountMethod, DocumentDiscount, DocumentInput};
pub use line_item::LineItemInput;
pub use totals::DocumentTotals;
