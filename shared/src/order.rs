//! Order types consumed by the stock deduction engine
//!
//! The order lifecycle (table seating, cart, payment) is owned by the
//! surrounding application; the engine only consumes the status
//! transition and the line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Completed,
    Canceled,
}

/// One sold line: product and quantity, with the charged price snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total: f64,
}

impl OrderItem {
    pub fn new(product_id: impl Into<String>, quantity: i32, unit_price: f64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            unit_price,
            total: unit_price * quantity as f64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// A table/tab order, created open.
    pub fn new(items: Vec<OrderItem>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            status: OrderStatus::Open,
            date: Utc::now(),
            items,
        }
    }

    /// A walk-in/counter sale, created already completed.
    pub fn completed(items: Vec<OrderItem>) -> Self {
        Self {
            status: OrderStatus::Completed,
            ..Self::new(items)
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
