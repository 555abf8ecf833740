//! Pricing service
//!
//! Composes costing, fixed-cost allocation and the suggestion engine
//! over the stores into a single quote per product.

use crate::costing::product_unit_cost;
use crate::money;
use crate::pricing::allocator::fixed_cost_percent;
use crate::pricing::engine::{FLOOR_MARGIN_PERCENT, PriceSuggestion, suggest_price};
use crate::store::{CatalogStore, SettingsStore};
use rust_decimal::prelude::*;
use serde::Serialize;
use shared::error::{CostingError, CostingResult};
use std::sync::Arc;

/// Everything the menu screen needs to show for one product: the cost
/// breakdown behind the suggestion, and how the price currently on the
/// menu compares.
#[derive(Debug, Clone, Serialize)]
pub struct PriceQuote {
    pub product_id: String,
    pub unit_cost: f64,
    pub fixed_cost_percent: f64,
    pub tax_and_loss_percent: f64,
    pub target_margin: f64,
    /// Deductions actually used, after any clamp.
    pub total_deduction_percent: f64,
    pub suggestion: PriceSuggestion,
    /// Realized margin at the price currently on the menu, as a
    /// percentage of that price. None when the product has no price yet.
    pub margin_at_current_price: Option<f64>,
    /// True when the recipe costs nothing (usually because it is empty);
    /// the suggestion is 0 and the quote is not actionable.
    pub zero_cost: bool,
}

pub struct PricingService {
    catalog: Arc<dyn CatalogStore>,
    settings: Arc<dyn SettingsStore>,
}

impl PricingService {
    pub fn new(catalog: Arc<dyn CatalogStore>, settings: Arc<dyn SettingsStore>) -> Self {
        Self { catalog, settings }
    }

    pub async fn quote(&self, product_id: &str) -> CostingResult<PriceQuote> {
        let product = self
            .catalog
            .product(product_id)
            .await?
            .ok_or_else(|| CostingError::UnknownProduct(product_id.to_string()))?;

        let catalog = self.catalog.ingredient_catalog().await?;
        let unit_cost = product_unit_cost(&product, &catalog)?;

        let settings = self.settings.settings().await?;
        let fixed_costs = self.settings.fixed_costs().await?;
        let fcp = fixed_cost_percent(&fixed_costs, settings.estimated_monthly_billing);

        let suggestion = suggest_price(
            unit_cost,
            fcp,
            settings.tax_and_loss_percent,
            settings.target_margin,
        )?;
        let margin = if suggestion.clamped {
            FLOOR_MARGIN_PERCENT
        } else {
            settings.target_margin
        };

        Ok(PriceQuote {
            product_id: product_id.to_string(),
            unit_cost,
            fixed_cost_percent: fcp,
            tax_and_loss_percent: settings.tax_and_loss_percent,
            target_margin: settings.target_margin,
            total_deduction_percent: fcp + settings.tax_and_loss_percent + margin,
            suggestion,
            margin_at_current_price: realized_margin(
                unit_cost,
                product.current_price,
                fcp,
                settings.tax_and_loss_percent,
            ),
            zero_cost: unit_cost == 0.0,
        })
    }
}

/// Margin left at a given sale price after overhead percentages and the
/// ingredient cost, as a percentage of the price.
fn realized_margin(
    unit_cost: f64,
    price: f64,
    fixed_cost_percent: f64,
    tax_and_loss_percent: f64,
) -> Option<f64> {
    if !price.is_finite() || price <= 0.0 {
        return None;
    }
    let price = money::to_decimal(price);
    if price.is_zero() {
        return None;
    }
    let overhead = money::to_decimal(fixed_cost_percent + tax_and_loss_percent);
    let cost_share = money::to_decimal(unit_cost) / price * Decimal::ONE_HUNDRED;
    Some(money::to_f64(Decimal::ONE_HUNDRED - overhead - cost_share))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use shared::models::{FixedCost, Ingredient, Product, RecipeItem, Settings, Unit};

    fn seeded_store() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        store
            .upsert_ingredient(
                "beef",
                Ingredient {
                    id: Some("beef".to_string()),
                    name: "Beef".to_string(),
                    purchase_unit: Unit::Kg,
                    purchase_quantity: 1.0,
                    purchase_price: 20.0,
                    yield_percent: 100.0,
                    current_stock: Some(10.0),
                    min_stock: None,
                },
            )
            .unwrap();
        store.upsert_product(
            "burger",
            Product {
                id: Some("burger".to_string()),
                name: "Burger".to_string(),
                recipe: vec![RecipeItem {
                    ingredient_id: "beef".to_string(),
                    quantity_used: 200.0,
                    unit_used: Unit::G,
                }],
                current_price: 10.0,
            },
        );
        store.set_settings(Settings {
            target_margin: 20.0,
            tax_and_loss_percent: 12.0,
            estimated_monthly_billing: 10_000.0,
        });
        store.set_fixed_costs(vec![FixedCost {
            id: None,
            name: "rent".to_string(),
            amount: 2_000.0,
        }]);
        store
    }

    #[tokio::test]
    async fn test_quote_composes_cost_and_suggestion() {
        let store = seeded_store();
        let service = PricingService::new(store.clone(), store);

        let quote = service.quote("burger").await.unwrap();
        assert_eq!(quote.unit_cost, 4.0); // 200g at 0.02/g
        assert_eq!(quote.fixed_cost_percent, 20.0);
        assert_eq!(quote.total_deduction_percent, 52.0);
        // 4 / 0.48 = 8.333 -> 8.40
        assert_eq!(quote.suggestion.price, 8.4);
        assert!(!quote.suggestion.clamped);
        assert!(!quote.zero_cost);
    }

    #[tokio::test]
    async fn test_margin_at_current_price() {
        let store = seeded_store();
        let service = PricingService::new(store.clone(), store);

        // Price 10, cost 4: 100 - 32 overhead - 40 cost share = 28%
        let quote = service.quote("burger").await.unwrap();
        assert_eq!(quote.margin_at_current_price, Some(28.0));
    }

    #[tokio::test]
    async fn test_empty_recipe_quotes_zero() {
        let store = seeded_store();
        store.upsert_product(
            "water",
            Product {
                id: Some("water".to_string()),
                name: "Tap Water".to_string(),
                recipe: Vec::new(),
                current_price: 0.0,
            },
        );
        let service = PricingService::new(store.clone(), store);

        let quote = service.quote("water").await.unwrap();
        assert!(quote.zero_cost);
        assert_eq!(quote.suggestion.price, 0.0);
        assert_eq!(quote.margin_at_current_price, None);
    }

    #[tokio::test]
    async fn test_unknown_product() {
        let store = seeded_store();
        let service = PricingService::new(store.clone(), store);

        assert!(matches!(
            service.quote("nope").await,
            Err(CostingError::UnknownProduct(_))
        ));
    }
}
