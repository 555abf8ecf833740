//! Error taxonomy for costing, pricing and stock deduction
//!
//! Calculation errors (dimension, yield, package size, infeasible pricing)
//! are returned synchronously to the caller: they are bad input the user
//! can fix immediately. Referential problems in the deduction path
//! (unknown ingredient, missing recipe, untracked stock) are recoverable
//! by skipping and are surfaced through logs and the deduction report,
//! never by failing a completed sale.

use crate::models::Unit;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostingError {
    /// Unit conversion requested across incompatible physical dimensions.
    #[error("cannot convert {from} to {to}: incompatible dimensions")]
    DimensionMismatch { from: Unit, to: Unit },

    /// Yield must be in (0, 100]; anything else is bad master data.
    #[error("ingredient '{ingredient}': yield of {yield_percent}% is outside (0, 100]")]
    InvalidYield {
        ingredient: String,
        yield_percent: f64,
    },

    /// A package must contain a positive amount of the purchase unit.
    #[error("ingredient '{ingredient}': package size of {purchase_quantity} {unit} is not positive")]
    InvalidPackageSize {
        ingredient: String,
        purchase_quantity: f64,
        unit: Unit,
    },

    #[error("ingredient not found: {0}")]
    UnknownIngredient(String),

    #[error("product not found: {0}")]
    UnknownProduct(String),

    #[error("product {0} has no recipe")]
    MissingRecipe(String),

    #[error("ingredient {0} is not under stock control")]
    StockNotTracked(String),

    /// Even the floor margin pushes total deductions to 100% of the sale
    /// price or beyond. Carries the raw numbers so the user can see which
    /// setting to adjust.
    #[error(
        "unsustainable pricing: fixed costs {fixed_cost_percent}% + tax/loss {tax_and_loss_percent}% + floor margin {floor_margin_percent}% = {total_percent}% of the sale price"
    )]
    PricingInfeasible {
        fixed_cost_percent: f64,
        tax_and_loss_percent: f64,
        floor_margin_percent: f64,
        total_percent: f64,
    },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(String),
}

pub type CostingResult<T> = Result<T, CostingError>;
