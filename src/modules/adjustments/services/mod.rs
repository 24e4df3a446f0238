pub mod adjustment_engine;

pub use adjustment_engine::AdjustmentEngine;
