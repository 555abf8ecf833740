//! Store-wide pricing settings

use serde::{Deserialize, Serialize};

/// Percentages and the billing estimate the pricing engine works from.
///
/// `estimated_monthly_billing` is only ever a denominator for fixed-cost
/// allocation; sales never mutate it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Target profit margin, percent of the sale price.
    pub target_margin: f64,
    /// Taxes plus expected loss/waste, percent of the sale price.
    pub tax_and_loss_percent: f64,
    /// Estimated revenue per month, in currency.
    pub estimated_monthly_billing: f64,
}
