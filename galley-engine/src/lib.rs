//! Recipe costing and inventory deduction for restaurant menus.
//!
//! The rules that turn ingredient purchase data, recipe composition,
//! fixed costs and margin targets into a per-dish cost and a suggested
//! price, and the rules that turn a completed sale into exactly-once
//! stock decrements. Pure functions plus one stateful deduction service;
//! all reads and writes go through the `store` traits.
//!
//! # Module structure
//!
//! ```text
//! galley-engine/src/
//! ├── units.rs      # unit conversion (closed table)
//! ├── money.rs      # Decimal precision helpers
//! ├── costing/      # ingredient + recipe cost calculators
//! ├── pricing/      # fixed-cost allocation, price suggestion, quotes
//! ├── store/        # repository traits + in-memory reference store
//! ├── stock/        # stock deduction engine
//! └── logger.rs     # tracing subscriber setup
//! ```

pub mod costing;
pub mod logger;
pub mod money;
pub mod pricing;
pub mod stock;
pub mod store;
pub mod units;

// Re-export public types
pub use costing::{price_per_unit, product_unit_cost, real_unit_cost};
pub use pricing::{PriceQuote, PriceSuggestion, PricingService, fixed_cost_percent, suggest_price};
pub use stock::{DeductionReport, StockDeduction, triggers_deduction};
pub use store::{CatalogStore, MemoryStore, OrderStore, SettingsStore};
pub use units::convert;
