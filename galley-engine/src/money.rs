//! Decimal precision helpers
//!
//! All money and stock math is done in `Decimal` internally and converted
//! back to `f64` at the API boundary with an explicit rounding strategy.

use rust_decimal::prelude::*;

/// Money is rounded to 2 decimal places, half-up.
pub const MONEY_SCALE: u32 = 2;

/// Stock is rounded to 3 decimal places (~1 g / 1 ml resolution for
/// kg/l-tracked ingredients) to suppress floating-point noise after
/// repeated deductions.
pub const STOCK_SCALE: u32 = 3;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Convert a stock quantity back to f64, rounded to 3 decimal places
#[inline]
pub fn to_stock(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(STOCK_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}
