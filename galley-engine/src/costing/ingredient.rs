//! Ingredient cost calculation
//!
//! What one purchase unit of *usable* ingredient actually costs once
//! trimming/prep loss is paid for. A 10.00 package of 2 kg at 80% yield
//! is not 5.00/kg but 6.25/kg, because a fifth of every package goes in
//! the bin.

use crate::money::to_decimal;
use rust_decimal::prelude::*;
use shared::error::{CostingError, CostingResult};
use shared::models::Ingredient;

/// Nominal price per purchase unit, before yield adjustment.
pub fn price_per_unit(ingredient: &Ingredient) -> CostingResult<f64> {
    let quantity = package_quantity(ingredient)?;
    let price = to_decimal(ingredient.purchase_price);
    Ok((price / quantity).to_f64().unwrap_or_default())
}

/// Yield-adjusted real cost per purchase unit.
pub fn real_unit_cost(ingredient: &Ingredient) -> CostingResult<f64> {
    let quantity = package_quantity(ingredient)?;
    let yield_factor = yield_factor(ingredient)?;
    let price = to_decimal(ingredient.purchase_price);
    let real = price / quantity / yield_factor;
    Ok(real.to_f64().unwrap_or_default())
}

/// Package size as a positive Decimal, or `InvalidPackageSize`.
fn package_quantity(ingredient: &Ingredient) -> CostingResult<Decimal> {
    let quantity = to_decimal(ingredient.purchase_quantity);
    // to_decimal collapses non-finite and subnormal values to zero, so a
    // single positivity check covers every bad input.
    if quantity <= Decimal::ZERO {
        return Err(CostingError::InvalidPackageSize {
            ingredient: ingredient.name.clone(),
            purchase_quantity: ingredient.purchase_quantity,
            unit: ingredient.purchase_unit,
        });
    }
    Ok(quantity)
}

/// Yield as a fraction in (0, 1], or `InvalidYield`.
fn yield_factor(ingredient: &Ingredient) -> CostingResult<Decimal> {
    let percent = to_decimal(ingredient.yield_percent);
    if percent <= Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(CostingError::InvalidYield {
            ingredient: ingredient.name.clone(),
            yield_percent: ingredient.yield_percent,
        });
    }
    Ok(percent / Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Unit;

    fn ingredient(quantity: f64, price: f64, yield_percent: f64) -> Ingredient {
        Ingredient {
            id: Some("i1".to_string()),
            name: "Test".to_string(),
            purchase_unit: Unit::Kg,
            purchase_quantity: quantity,
            purchase_price: price,
            yield_percent,
            current_stock: None,
            min_stock: None,
        }
    }

    #[test]
    fn test_full_yield_equals_nominal_price() {
        let i = ingredient(2.0, 10.0, 100.0);
        assert_eq!(price_per_unit(&i).unwrap(), 5.0);
        assert_eq!(real_unit_cost(&i).unwrap(), 5.0);
    }

    #[test]
    fn test_yield_loss_raises_real_cost() {
        let i = ingredient(2.0, 10.0, 80.0);
        assert_eq!(real_unit_cost(&i).unwrap(), 6.25);
        assert!(real_unit_cost(&i).unwrap() > price_per_unit(&i).unwrap());
    }

    #[test]
    fn test_sub_cent_unit_cost_keeps_precision() {
        // 1000 g package at 5.00: half a cent per gram must not round away
        let mut i = ingredient(1000.0, 5.0, 100.0);
        i.purchase_unit = Unit::G;
        assert_eq!(real_unit_cost(&i).unwrap(), 0.005);
    }

    #[test]
    fn test_free_ingredient_costs_zero() {
        let i = ingredient(1.0, 0.0, 100.0);
        assert_eq!(real_unit_cost(&i).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_package_size() {
        for quantity in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let i = ingredient(quantity, 10.0, 100.0);
            assert!(matches!(
                real_unit_cost(&i),
                Err(CostingError::InvalidPackageSize { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_yield() {
        for yield_percent in [0.0, -5.0, 150.0, f64::NAN] {
            let i = ingredient(1.0, 10.0, yield_percent);
            assert!(matches!(
                real_unit_cost(&i),
                Err(CostingError::InvalidYield { .. })
            ));
        }
    }
}
