//! Ingredient model
//!
//! A purchasable raw material. Cost math lives in the engine; this model
//! only carries the purchase data and the stock fields, plus boundary
//! validation of the numeric invariants.

use super::Unit;
use crate::error::{CostingError, CostingResult};
use serde::{Deserialize, Serialize};

fn default_yield() -> f64 {
    100.0
}

/// Upper bound for prices, package sizes and stock levels. Values above
/// it are data-entry errors, and they stay well inside the range the
/// engine's decimal math can represent.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Ingredient entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Option<String>,
    pub name: String,
    /// Unit the ingredient is bought in; stock is tracked in this unit.
    pub purchase_unit: Unit,
    /// Amount contained in one purchased package, in `purchase_unit`. Must be > 0.
    pub purchase_quantity: f64,
    /// Price paid for one package. Must be >= 0.
    pub purchase_price: f64,
    /// Usable fraction after trimming/prep loss, in percent (0, 100].
    #[serde(default = "default_yield")]
    pub yield_percent: f64,
    /// Present only for stock-controlled ingredients, in `purchase_unit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stock: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<f64>,
}

impl Ingredient {
    /// Check the numeric invariants of the master data.
    ///
    /// Bad package size and yield are reported with their taxonomy errors
    /// so the caller sees the same class of failure the cost calculator
    /// would raise later.
    pub fn validate(&self) -> CostingResult<()> {
        if !self.purchase_quantity.is_finite()
            || self.purchase_quantity <= 0.0
            || self.purchase_quantity > MAX_AMOUNT
        {
            return Err(CostingError::InvalidPackageSize {
                ingredient: self.name.clone(),
                purchase_quantity: self.purchase_quantity,
                unit: self.purchase_unit,
            });
        }
        if !self.yield_percent.is_finite()
            || self.yield_percent <= 0.0
            || self.yield_percent > 100.0
        {
            return Err(CostingError::InvalidYield {
                ingredient: self.name.clone(),
                yield_percent: self.yield_percent,
            });
        }
        if !self.purchase_price.is_finite()
            || self.purchase_price < 0.0
            || self.purchase_price > MAX_AMOUNT
        {
            return Err(CostingError::Validation(format!(
                "ingredient '{}': purchase price must be between 0 and {}, got {}",
                self.name, MAX_AMOUNT, self.purchase_price
            )));
        }
        if let Some(stock) = self.current_stock
            && (!stock.is_finite() || stock < 0.0 || stock > MAX_AMOUNT)
        {
            return Err(CostingError::Validation(format!(
                "ingredient '{}': current stock must be between 0 and {}, got {}",
                self.name, MAX_AMOUNT, stock
            )));
        }
        if let Some(min) = self.min_stock
            && (!min.is_finite() || min < 0.0 || min > MAX_AMOUNT)
        {
            return Err(CostingError::Validation(format!(
                "ingredient '{}': minimum stock must be between 0 and {}, got {}",
                self.name, MAX_AMOUNT, min
            )));
        }
        Ok(())
    }

    /// True when the ingredient is stock-controlled and below its minimum.
    pub fn below_min_stock(&self) -> bool {
        match (self.current_stock, self.min_stock) {
            (Some(current), Some(min)) => current < min,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flour() -> Ingredient {
        Ingredient {
            id: Some("flour".to_string()),
            name: "Flour".to_string(),
            purchase_unit: Unit::Kg,
            purchase_quantity: 1.0,
            purchase_price: 2.5,
            yield_percent: 100.0,
            current_stock: Some(5.0),
            min_stock: Some(1.0),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(flour().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_package() {
        let mut i = flour();
        i.purchase_quantity = 0.0;
        assert!(matches!(
            i.validate(),
            Err(CostingError::InvalidPackageSize { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_yield_out_of_range() {
        let mut i = flour();
        i.yield_percent = 0.0;
        assert!(matches!(i.validate(), Err(CostingError::InvalidYield { .. })));
        i.yield_percent = 120.0;
        assert!(matches!(i.validate(), Err(CostingError::InvalidYield { .. })));
    }

    #[test]
    fn test_validate_rejects_negative_price_and_stock() {
        let mut i = flour();
        i.purchase_price = -1.0;
        assert!(matches!(i.validate(), Err(CostingError::Validation(_))));

        let mut i = flour();
        i.current_stock = Some(-0.5);
        assert!(matches!(i.validate(), Err(CostingError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        // 1e30 is finite but collapses to 0 in decimal math, which would
        // silently cost the ingredient at nothing
        let mut i = flour();
        i.purchase_price = 1e30;
        assert!(matches!(i.validate(), Err(CostingError::Validation(_))));

        let mut i = flour();
        i.purchase_quantity = 1e30;
        assert!(matches!(
            i.validate(),
            Err(CostingError::InvalidPackageSize { .. })
        ));

        let mut i = flour();
        i.current_stock = Some(1e30);
        assert!(matches!(i.validate(), Err(CostingError::Validation(_))));
    }

    #[test]
    fn test_yield_defaults_to_100() {
        let json = r#"{
            "id": null,
            "name": "Salt",
            "purchase_unit": "kg",
            "purchase_quantity": 1.0,
            "purchase_price": 0.8
        }"#;
        let ingredient: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ingredient.yield_percent, 100.0);
        assert!(ingredient.current_stock.is_none());
    }

    #[test]
    fn test_below_min_stock() {
        let mut i = flour();
        assert!(!i.below_min_stock());
        i.current_stock = Some(0.5);
        assert!(i.below_min_stock());
        i.min_stock = None;
        assert!(!i.below_min_stock());
    }
}
