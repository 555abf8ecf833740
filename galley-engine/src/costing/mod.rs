//! Cost calculators
//!
//! Pure functions: yield-adjusted ingredient cost and per-unit recipe
//! cost. Unit costs are returned at full precision; display rounding is
//! the caller's concern.

pub mod ingredient;
pub mod recipe;

pub use ingredient::{price_per_unit, real_unit_cost};
pub use recipe::product_unit_cost;
