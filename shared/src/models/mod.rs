//! Data models
//!
//! Shared between the engine and the application layer. All numeric
//! invariants are enforced at the boundary via `validate()`; the engine
//! assumes validated master data but still fails loudly on bad input.

pub mod fixed_cost;
pub mod ingredient;
pub mod product;
pub mod settings;
pub mod unit;

// Re-exports
pub use fixed_cost::*;
pub use ingredient::*;
pub use product::*;
pub use settings::*;
pub use unit::*;
