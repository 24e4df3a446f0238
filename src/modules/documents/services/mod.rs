pub mod totals_calculator;
pub mod totals_presenter;

pub use totals_calculator::DocumentTotalsCalculator;
pub use totals_presenter::{TotalsDisplay, TotalsPresenter};
