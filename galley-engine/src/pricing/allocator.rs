//! Fixed-cost allocation
//!
//! Spreads the month's fixed charges over estimated monthly billing as a
//! flat percentage charged identically to every product. This is
//! deliberately not activity-based costing: the dish that sells twice a
//! month carries the same percentage as the best seller, regardless of
//! sales volume or preparation time. Known simplification, kept faithful
//! to the source system.

use crate::money::to_decimal;
use rust_decimal::prelude::*;
use shared::models::FixedCost;

/// Fixed costs as a percentage of estimated monthly billing.
///
/// Returns 0 when the billing estimate is missing or non-positive, so a
/// half-configured store never divides by zero.
pub fn fixed_cost_percent(fixed_costs: &[FixedCost], estimated_monthly_billing: f64) -> f64 {
    if !estimated_monthly_billing.is_finite() || estimated_monthly_billing <= 0.0 {
        return 0.0;
    }
    let billing = to_decimal(estimated_monthly_billing);
    if billing.is_zero() {
        return 0.0;
    }
    let total: Decimal = fixed_costs.iter().map(|c| to_decimal(c.amount)).sum();
    (total / billing * Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or_default()
}
