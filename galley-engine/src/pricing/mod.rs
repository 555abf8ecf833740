//! Pricing
//!
//! Fixed-cost allocation, markup-inside price suggestion, and the
//! service that composes them over the stores.

pub mod allocator;
pub mod engine;
pub mod service;

pub use allocator::fixed_cost_percent;
pub use engine::{FLOOR_MARGIN_PERCENT, PriceSuggestion, suggest_price};
pub use service::{PriceQuote, PricingService};
