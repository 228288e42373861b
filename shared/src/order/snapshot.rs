//! Order record - the canonical state kept by the store registry

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status every order starts in
pub const STATUS_PENDING: &str = "pending";

/// One line of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Pizza name, e.g. "Margherita"
    pub pizza_type: String,
    /// Number of pizzas (must be >= 1)
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(pizza_type: impl Into<String>, quantity: u32) -> Self {
        Self {
            pizza_type: pizza_type.into(),
            quantity,
        }
    }
}

/// Order record
///
/// Status is free-form: producers report whatever vocabulary they use
/// ("cooking", "COOKED", "delivered", ...) and the store stores it verbatim
/// after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID (assigned by the store, never reused)
    pub order_id: Uuid,
    /// Line items, never empty
    pub order_items: Vec<OrderItem>,
    /// Free-text note from the customer
    #[serde(default)]
    pub order_data: String,
    /// Current status
    pub order_status: String,
}

impl Order {
    /// Create a new pending order
    pub fn new(order_id: Uuid, order_items: Vec<OrderItem>, order_data: impl Into<String>) -> Self {
        Self {
            order_id,
            order_items,
            order_data: order_data.into(),
            order_status: STATUS_PENDING.to_string(),
        }
    }

    /// Total number of pizzas across all lines
    ///
    /// Summed as `u64`: every line may carry up to `u32::MAX`.
    pub fn pizza_count(&self) -> u64 {
        self.order_items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}
