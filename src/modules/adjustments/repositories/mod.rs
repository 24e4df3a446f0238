pub mod adjustment_lookup;

pub use adjustment_lookup::{AdjustmentLookup, InMemoryAdjustments};
