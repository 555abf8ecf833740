//! Seed a small catalog, quote a dish, then complete a sale and watch
//! the stock move.
//!
//! ```sh
//! cargo run -p galley-engine --example price_a_menu
//! ```

use galley_engine::store::{CatalogStore, MemoryStore};
use galley_engine::{PricingService, StockDeduction, logger};
use shared::models::{FixedCost, Ingredient, Product, RecipeItem, Settings, Unit};
use shared::order::{Order, OrderItem};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init();

    let store = Arc::new(MemoryStore::new());
    store.upsert_ingredient(
        "beef",
        Ingredient {
            id: Some("beef".to_string()),
            name: "Ground Beef".to_string(),
            purchase_unit: Unit::Kg,
            purchase_quantity: 5.0,
            purchase_price: 60.0,
            yield_percent: 90.0,
            current_stock: Some(5.0),
            min_stock: Some(1.0),
        },
    )?;
    store.upsert_ingredient(
        "bun",
        Ingredient {
            id: Some("bun".to_string()),
            name: "Brioche Bun".to_string(),
            purchase_unit: Unit::Un,
            purchase_quantity: 24.0,
            purchase_price: 12.0,
            yield_percent: 100.0,
            current_stock: Some(48.0),
            min_stock: Some(12.0),
        },
    )?;
    store.upsert_product(
        "burger",
        Product {
            id: Some("burger".to_string()),
            name: "House Burger".to_string(),
            recipe: vec![
                RecipeItem {
                    ingredient_id: "beef".to_string(),
                    quantity_used: 180.0,
                    unit_used: Unit::G,
                },
                RecipeItem {
                    ingredient_id: "bun".to_string(),
                    quantity_used: 1.0,
                    unit_used: Unit::Un,
                },
            ],
            current_price: 9.5,
        },
    );
    store.set_settings(Settings {
        target_margin: 20.0,
        tax_and_loss_percent: 12.0,
        estimated_monthly_billing: 30_000.0,
    });
    store.set_fixed_costs(vec![
        FixedCost {
            id: None,
            name: "rent".to_string(),
            amount: 4_500.0,
        },
        FixedCost {
            id: None,
            name: "payroll".to_string(),
            amount: 6_000.0,
        },
    ]);

    let pricing = PricingService::new(store.clone(), store.clone());
    let quote = pricing.quote("burger").await?;
    println!("{}", serde_json::to_string_pretty(&quote)?);

    let deduction = StockDeduction::new(store.clone(), store.clone());
    let sale = Order::completed(vec![OrderItem::new("burger", 4, quote.suggestion.price)]);
    let report = deduction.on_status_change(&sale, None).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    for (id, ingredient) in store.ingredient_catalog().await? {
        println!("{}: {:?} {} on hand", id, ingredient.current_stock, ingredient.purchase_unit);
        if ingredient.below_min_stock() {
            println!("  -> below minimum stock, reorder");
        }
    }
    Ok(())
}
