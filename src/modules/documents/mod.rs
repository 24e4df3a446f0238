pub mod models;
pub mod services;

pub use models::{
    DiscountComputation, DiscountMethod, DocumentDiscount, DocumentInput, DocumentTotals,
    LineItemInput,
};
pub use services::{DocumentTotalsCalculator, TotalsDisplay, TotalsPresenter};
