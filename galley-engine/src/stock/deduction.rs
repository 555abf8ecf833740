//! Order-driven stock deduction
//!
//! An order deducts stock exactly once, when it transitions into
//! `Completed` from any other state (or is created directly as
//! `Completed`, as walk-in sales are). The claim on the order id is
//! taken before any stock is touched, so retries, duplicate deliveries
//! and concurrent completions are all no-ops. Within one run each recipe
//! line fails soft: a broken line is logged and reported, the rest of
//! the order still deducts.

use crate::store::{CatalogStore, OrderStore};
use crate::units::convert;
use serde::Serialize;
use shared::error::CostingResult;
use shared::order::{Order, OrderItem, OrderStatus};
use std::sync::Arc;

/// Stock is deducted on the transition *into* `Completed`. `previous`
/// is `None` when the order was just created with its current status.
pub fn triggers_deduction(previous: Option<OrderStatus>, next: OrderStatus) -> bool {
    next == OrderStatus::Completed && previous != Some(OrderStatus::Completed)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockMovement {
    pub ingredient_id: String,
    /// Quantity removed, in the ingredient's purchase unit.
    pub deducted: f64,
    pub new_stock: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedLine {
    pub product_id: String,
    pub ingredient_id: Option<String>,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Order item quantity was zero or negative; a negative quantity
    /// would flow through as a stock *increase*.
    InvalidQuantity,
    UnknownProduct,
    EmptyRecipe,
    UnknownIngredient,
    StockNotTracked,
    DimensionMismatch,
    StorageFailure(String),
}

/// What one deduction run did. `applied` is false when the status
/// transition did not trigger deduction or the order had already been
/// deducted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeductionReport {
    pub order_id: String,
    pub applied: bool,
    pub movements: Vec<StockMovement>,
    pub skipped: Vec<SkippedLine>,
}

impl DeductionReport {
    fn untriggered(order_id: &str) -> Self {
        Self {
            order_id: order_id.to_string(),
            applied: false,
            movements: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

pub struct StockDeduction {
    catalog: Arc<dyn CatalogStore>,
    orders: Arc<dyn OrderStore>,
}

impl StockDeduction {
    pub fn new(catalog: Arc<dyn CatalogStore>, orders: Arc<dyn OrderStore>) -> Self {
        Self { catalog, orders }
    }

    /// Entry point for every order save. `previous` is the status the
    /// order had before this save, `None` if it was just created.
    pub async fn on_status_change(
        &self,
        order: &Order,
        previous: Option<OrderStatus>,
    ) -> CostingResult<DeductionReport> {
        if !triggers_deduction(previous, order.status) {
            return Ok(DeductionReport::untriggered(&order.id));
        }
        if !self.orders.claim_deduction(&order.id).await? {
            tracing::info!(order_id = %order.id, "order already deducted, skipping");
            return Ok(DeductionReport::untriggered(&order.id));
        }

        // The claim is spent: from here on every failure is logged and
        // skipped, never propagated, or the failed lines could never be
        // deducted again.
        let mut report = DeductionReport {
            order_id: order.id.clone(),
            applied: true,
            movements: Vec::new(),
            skipped: Vec::new(),
        };
        for item in &order.items {
            self.deduct_item(item, &mut report).await;
        }
        tracing::info!(
            order_id = %order.id,
            movements = report.movements.len(),
            skipped = report.skipped.len(),
            "stock deducted"
        );
        Ok(report)
    }

    async fn deduct_item(&self, item: &OrderItem, report: &mut DeductionReport) {
        let skip = |reason: SkipReason| SkippedLine {
            product_id: item.product_id.clone(),
            ingredient_id: None,
            reason,
        };

        if item.quantity <= 0 {
            tracing::warn!(product_id = %item.product_id, quantity = item.quantity, "order item quantity is not positive, skipping");
            report.skipped.push(skip(SkipReason::InvalidQuantity));
            return;
        }
        // Fresh read per item so a recipe edited mid-service deducts
        // what the kitchen actually made next.
        let product = match self.catalog.product(&item.product_id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                tracing::warn!(product_id = %item.product_id, "unknown product on order, skipping");
                report.skipped.push(skip(SkipReason::UnknownProduct));
                return;
            }
            Err(e) => {
                tracing::warn!(product_id = %item.product_id, error = %e, "product read failed");
                report.skipped.push(skip(SkipReason::StorageFailure(e.to_string())));
                return;
            }
        };
        if product.recipe.is_empty() {
            tracing::warn!(product_id = %item.product_id, "product has no recipe, nothing to deduct");
            report.skipped.push(skip(SkipReason::EmptyRecipe));
            return;
        }
        for line in &product.recipe {
            self.deduct_line(&item.product_id, &line.ingredient_id, line.quantity_used, line.unit_used, item.quantity, report)
                .await;
        }
    }

    async fn deduct_line(
        &self,
        product_id: &str,
        ingredient_id: &str,
        quantity_used: f64,
        unit_used: shared::models::Unit,
        order_quantity: i32,
        report: &mut DeductionReport,
    ) {
        let skip = |reason: SkipReason| SkippedLine {
            product_id: product_id.to_string(),
            ingredient_id: Some(ingredient_id.to_string()),
            reason,
        };

        let ingredient = match self.catalog.ingredient(ingredient_id).await {
            Ok(Some(ingredient)) => ingredient,
            Ok(None) => {
                tracing::warn!(%product_id, %ingredient_id, "recipe references unknown ingredient");
                report.skipped.push(skip(SkipReason::UnknownIngredient));
                return;
            }
            Err(e) => {
                tracing::warn!(%product_id, %ingredient_id, error = %e, "ingredient read failed");
                report.skipped.push(skip(SkipReason::StorageFailure(e.to_string())));
                return;
            }
        };
        if ingredient.current_stock.is_none() {
            tracing::warn!(%product_id, %ingredient_id, "ingredient does not track stock");
            report.skipped.push(skip(SkipReason::StockNotTracked));
            return;
        }

        let used = quantity_used * f64::from(order_quantity);
        let in_purchase_unit = match convert(used, unit_used, ingredient.purchase_unit) {
            Ok(q) => q,
            Err(e) => {
                tracing::warn!(%product_id, %ingredient_id, error = %e, "recipe unit incompatible with purchase unit");
                report.skipped.push(skip(SkipReason::DimensionMismatch));
                return;
            }
        };

        match self.catalog.deduct_stock(ingredient_id, in_purchase_unit).await {
            Ok(new_stock) => {
                if let Some(min) = ingredient.min_stock
                    && new_stock < min
                {
                    tracing::warn!(%ingredient_id, new_stock, min_stock = min, "stock below minimum");
                }
                report.movements.push(StockMovement {
                    ingredient_id: ingredient_id.to_string(),
                    deducted: in_purchase_unit,
                    new_stock,
                });
            }
            Err(e) => {
                tracing::warn!(%product_id, %ingredient_id, error = %e, "stock write failed");
                report.skipped.push(skip(SkipReason::StorageFailure(e.to_string())));
            }
        }
    }
}
