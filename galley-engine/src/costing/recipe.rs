//! Recipe cost calculation
//!
//! Total ingredient cost per unit of product sold: each recipe line is
//! converted into the ingredient's purchase unit and priced at the
//! yield-adjusted unit cost.

use super::ingredient::real_unit_cost;
use crate::money::to_decimal;
use crate::units::convert;
use rust_decimal::prelude::*;
use shared::error::{CostingError, CostingResult};
use shared::models::{Ingredient, Product};
use std::collections::HashMap;

/// Cost of one unit of the product, in currency.
///
/// An empty recipe costs 0; that is a data-entry warning for the caller,
/// not an error here.
pub fn product_unit_cost(
    product: &Product,
    catalog: &HashMap<String, Ingredient>,
) -> CostingResult<f64> {
    if product.recipe.is_empty() {
        tracing::debug!(product = %product.name, "product has an empty recipe, cost is 0");
        return Ok(0.0);
    }

    let mut total = Decimal::ZERO;
    for line in &product.recipe {
        let ingredient = catalog
            .get(&line.ingredient_id)
            .ok_or_else(|| CostingError::UnknownIngredient(line.ingredient_id.clone()))?;
        let unit_cost = real_unit_cost(ingredient)?;
        let quantity = convert(line.quantity_used, line.unit_used, ingredient.purchase_unit)?;
        total += to_decimal(unit_cost) * to_decimal(quantity);
    }
    Ok(total.to_f64().unwrap_or_default())
}
