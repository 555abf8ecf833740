//! Price suggestion
//!
//! Markup-inside pricing: the fixed-cost percentage, tax/loss percentage
//! and target margin are all defined as fractions of the *final* sale
//! price, so `price = cost / (1 - deductions/100)`. When the configured
//! targets would eat the whole price, the margin is clamped to a floor
//! and the caller is told; when even the floor cannot fit, pricing is
//! infeasible and the raw numbers are surfaced for the user to fix.

use crate::money::{to_decimal, to_f64};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::error::{CostingError, CostingResult};

/// Margin floor used when the configured target is unsustainable.
pub const FLOOR_MARGIN_PERCENT: f64 = 10.0;

/// Suggested prices land on a 0.10 grid (one decimal place).
const PRICE_STEP_SCALE: u32 = 1;

/// A suggested sale price. Applying it to the menu is a separate,
/// explicit user action, never automatic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSuggestion {
    pub price: f64,
    /// True when the configured margin was unsustainable and
    /// [`FLOOR_MARGIN_PERCENT`] was used instead; the caller should warn
    /// the user that their targets need adjusting.
    pub clamped: bool,
}

pub fn suggest_price(
    unit_cost: f64,
    fixed_cost_percent: f64,
    tax_and_loss_percent: f64,
    target_margin: f64,
) -> CostingResult<PriceSuggestion> {
    require_non_negative(unit_cost, "unit cost")?;
    require_non_negative(fixed_cost_percent, "fixed cost percent")?;
    require_non_negative(tax_and_loss_percent, "tax and loss percent")?;
    require_non_negative(target_margin, "target margin")?;

    let mut margin = target_margin;
    let mut clamped = false;
    if fixed_cost_percent + tax_and_loss_percent + margin >= 100.0 {
        margin = FLOOR_MARGIN_PERCENT;
        clamped = true;
        let floor_total = fixed_cost_percent + tax_and_loss_percent + margin;
        if floor_total >= 100.0 {
            return Err(CostingError::PricingInfeasible {
                fixed_cost_percent,
                tax_and_loss_percent,
                floor_margin_percent: FLOOR_MARGIN_PERCENT,
                total_percent: floor_total,
            });
        }
    }

    // A zero-cost product (usually an empty recipe) suggests 0; charm
    // rounding a zero would otherwise yield -0.10.
    if unit_cost == 0.0 {
        return Ok(PriceSuggestion {
            price: 0.0,
            clamped,
        });
    }

    let total = to_decimal(fixed_cost_percent + tax_and_loss_percent + margin);
    let keep = Decimal::ONE - total / Decimal::ONE_HUNDRED;
    let raw = to_decimal(unit_cost) / keep;
    Ok(PriceSuggestion {
        price: charm_price(raw),
        clamped,
    })
}

/// Round up to the next 0.10; a result ending in ".00" steps down to
/// ".90". The menu never shows a price ending in ".00".
fn charm_price(raw: Decimal) -> f64 {
    let mut price = raw.round_dp_with_strategy(PRICE_STEP_SCALE, RoundingStrategy::AwayFromZero);
    if price.fract().is_zero() {
        price -= Decimal::new(1, 1);
    }
    to_f64(price)
}

fn require_non_negative(value: f64, field: &str) -> CostingResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CostingError::Validation(format!(
            "{} must be a non-negative finite number, got {}",
            field, value
        )));
    }
    Ok(())
}
