//! In-memory reference store
//!
//! DashMap-backed implementation of the store traits, used by the tests
//! and the demo and usable as-is for a single-process deployment. Stock
//! writes hold the map's per-key write guard across the
//! read-modify-write, which serializes concurrent deductions per
//! ingredient and closes the lost-update race.

use super::{CatalogStore, OrderStore, SettingsStore};
use crate::money::{to_decimal, to_stock};
use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use rust_decimal::Decimal;
use shared::error::{CostingError, CostingResult};
use shared::models::{FixedCost, Ingredient, Product, Settings};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    ingredients: DashMap<String, Ingredient>,
    products: DashMap<String, Product>,
    settings: RwLock<Settings>,
    fixed_costs: RwLock<Vec<FixedCost>>,
    deducted_orders: DashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an ingredient, enforcing the master-data
    /// invariants at the boundary.
    pub fn upsert_ingredient(
        &self,
        id: impl Into<String>,
        ingredient: Ingredient,
    ) -> CostingResult<()> {
        ingredient.validate()?;
        self.ingredients.insert(id.into(), ingredient);
        Ok(())
    }

    pub fn upsert_product(&self, id: impl Into<String>, product: Product) {
        self.products.insert(id.into(), product);
    }

    pub fn set_settings(&self, settings: Settings) {
        if let Ok(mut guard) = self.settings.write() {
            *guard = settings;
        }
    }

    pub fn set_fixed_costs(&self, fixed_costs: Vec<FixedCost>) {
        if let Ok(mut guard) = self.fixed_costs.write() {
            *guard = fixed_costs;
        }
    }

    /// The atomic stock write shared by deduction and manual adjustment.
    /// The DashMap entry guard is held for the whole read-modify-write.
    fn apply_stock_delta(&self, ingredient_id: &str, delta: Decimal) -> CostingResult<f64> {
        let mut entry = self
            .ingredients
            .get_mut(ingredient_id)
            .ok_or_else(|| CostingError::UnknownIngredient(ingredient_id.to_string()))?;
        let current = entry
            .current_stock
            .ok_or_else(|| CostingError::StockNotTracked(ingredient_id.to_string()))?;
        let new_stock = to_stock((to_decimal(current) + delta).max(Decimal::ZERO));
        entry.current_stock = Some(new_stock);
        Ok(new_stock)
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn ingredient(&self, id: &str) -> CostingResult<Option<Ingredient>> {
        Ok(self.ingredients.get(id).map(|entry| entry.clone()))
    }

    async fn product(&self, id: &str) -> CostingResult<Option<Product>> {
        Ok(self.products.get(id).map(|entry| entry.clone()))
    }

    async fn ingredient_catalog(&self) -> CostingResult<HashMap<String, Ingredient>> {
        Ok(self
            .ingredients
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }

    async fn deduct_stock(&self, ingredient_id: &str, quantity: f64) -> CostingResult<f64> {
        self.apply_stock_delta(ingredient_id, -to_decimal(quantity))
    }

    async fn adjust_stock(&self, ingredient_id: &str, delta: f64) -> CostingResult<f64> {
        self.apply_stock_delta(ingredient_id, to_decimal(delta))
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn settings(&self) -> CostingResult<Settings> {
        self.settings
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| CostingError::Storage("settings lock poisoned".to_string()))
    }

    async fn fixed_costs(&self) -> CostingResult<Vec<FixedCost>> {
        self.fixed_costs
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| CostingError::Storage("fixed cost lock poisoned".to_string()))
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn claim_deduction(&self, order_id: &str) -> CostingResult<bool> {
        // DashSet::insert is atomic: true only for the first caller.
        Ok(self.deducted_orders.insert(order_id.to_string()))
    }
}
