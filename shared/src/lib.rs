//! Shared types for the Galley costing engine
//!
//! Data models and the error taxonomy, shared between the engine and the
//! surrounding application (catalog CRUD, order lifecycle, settings UI).

pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use error::{CostingError, CostingResult};
pub use serde::{Deserialize, Serialize};
