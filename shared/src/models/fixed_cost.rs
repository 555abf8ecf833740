//! Fixed cost model

use serde::{Deserialize, Serialize};

/// A fixed monthly charge (rent, payroll, utilities).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedCost {
    pub id: Option<String>,
    pub name: String,
    /// Monthly amount.
    pub amount: f64,
}
