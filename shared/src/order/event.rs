//! Order events - immutable status reports from producers

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source tag used by the kitchen service
pub const SOURCE_KITCHEN: &str = "kitchen";
/// Source tag used by the delivery service
pub const SOURCE_DELIVERY: &str = "delivery";

/// Order event - exactly what a producer reported
///
/// `status` is the raw producer status, before any normalization. The set of
/// sources is open; `kitchen` and `delivery` are the ones in use today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEvent {
    /// Order this event belongs to
    pub order_id: Uuid,
    /// Raw status reported by the producer
    pub status: String,
    /// Producer tag
    pub source: String,
}

impl OrderEvent {
    pub fn new(order_id: Uuid, status: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            order_id,
            status: status.into(),
            source: source.into(),
        }
    }
}
