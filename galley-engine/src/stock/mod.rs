//! Stock deduction
//!
//! Turns an order's transition into `Completed` into exactly one round
//! of ingredient stock deductions.

pub mod deduction;

pub use deduction::{
    DeductionReport, SkipReason, SkippedLine, StockDeduction, StockMovement, triggers_deduction,
};
