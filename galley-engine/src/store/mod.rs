//! Storage seam
//!
//! The engine holds no state of its own; every read and write goes
//! through these traits, implemented by whatever persistence the
//! surrounding application uses. `deduct_stock`/`adjust_stock` are the
//! single write path for stock and MUST be atomic in the implementation:
//! the read-modify-write happens under one lock or one server-side
//! statement, so concurrent writers never lose an update.

use async_trait::async_trait;
use shared::error::CostingResult;
use shared::models::{FixedCost, Ingredient, Product, Settings};
use std::collections::HashMap;

pub mod memory;

pub use memory::MemoryStore;

/// Read access to ingredients and products, write access to stock.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn ingredient(&self, id: &str) -> CostingResult<Option<Ingredient>>;

    async fn product(&self, id: &str) -> CostingResult<Option<Product>>;

    /// Bulk read for costing runs, keyed by ingredient id.
    async fn ingredient_catalog(&self) -> CostingResult<HashMap<String, Ingredient>>;

    /// Atomically apply `new = round3(max(0, current - quantity))` and
    /// return the new stock. `quantity` is in the ingredient's purchase
    /// unit. Fails with `UnknownIngredient` or `StockNotTracked`.
    async fn deduct_stock(&self, ingredient_id: &str, quantity: f64) -> CostingResult<f64>;

    /// Manual stock movement (positive = in, negative = out) through the
    /// same atomic path as deduction. Floors at zero.
    async fn adjust_stock(&self, ingredient_id: &str, delta: f64) -> CostingResult<f64>;
}

/// Read access to the pricing configuration.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn settings(&self) -> CostingResult<Settings>;

    async fn fixed_costs(&self) -> CostingResult<Vec<FixedCost>>;
}

/// The persisted idempotency flag guarding stock deduction.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Atomically claim the one deduction an order is allowed. Returns
    /// true the first time for a given order id, false ever after.
    async fn claim_deduction(&self, order_id: &str) -> CostingResult<bool>;
}
